//! Definition to record serializers
//!
//! Serializers are stateless: they hold no data, have no interior
//! mutability and can be shared freely across threads.

pub mod permission;
pub mod tenant;

pub use permission::PermissionDefinitionSerializer;
pub use tenant::TenantConfigurationSerializer;

/// Converts a mutable definition into its immutable record and back
///
/// `serialize` is total for any well-formed definition. `deserialize` is
/// its inverse for names, display names and extra properties.
pub trait RecordSerializer: Send + Sync {
    /// Definition type
    type Definition;
    /// Context the definition lives in, such as its owning group
    type Context: ?Sized;
    /// Record type
    type Record;

    /// Build a record from a definition
    fn serialize(&self, definition: &Self::Definition, context: &Self::Context) -> Self::Record;

    /// Rebuild a definition from a record
    fn deserialize(&self, record: &Self::Record) -> Self::Definition;
}
