//! Domain Services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`TenantManager`] | Creates and renames tenants, invalidating cached configuration |
//! | [`TenantConfigurationSerializer`] | Tenant to [`TenantConfiguration`](crate::records::TenantConfiguration) |
//! | [`PermissionDefinitionSerializer`] | Permission definitions to flat records and back |

pub mod serializer;
pub mod tenant_manager;

pub use serializer::{
    PermissionDefinitionSerializer, RecordSerializer, TenantConfigurationSerializer,
};
pub use tenant_manager::TenantManager;
