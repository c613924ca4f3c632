//! Immutable Records
//!
//! Serializable snapshots of definitions. Records are what the cache
//! stores; they are built only by the serializers in
//! [`crate::services::serializer`] and expose their fields through getters.

pub mod permission_record;
pub mod tenant_configuration;

pub use permission_record::{PermissionDefinitionRecord, PermissionGroupDefinitionRecord};
pub use tenant_configuration::TenantConfiguration;
