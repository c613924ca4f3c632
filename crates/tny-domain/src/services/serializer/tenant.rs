//! Tenant configuration serializer

use super::RecordSerializer;
use crate::entities::Tenant;
use crate::records::TenantConfiguration;

/// Builds [`TenantConfiguration`] cache items from tenants
///
/// The record reuses the tenant id and its display name is the tenant name.
#[derive(Debug, Clone, Copy, Default)]
pub struct TenantConfigurationSerializer;

impl TenantConfigurationSerializer {
    /// Create a serializer
    pub fn new() -> Self {
        Self
    }
}

impl RecordSerializer for TenantConfigurationSerializer {
    type Definition = Tenant;
    type Context = ();
    type Record = TenantConfiguration;

    fn serialize(&self, tenant: &Tenant, _context: &()) -> TenantConfiguration {
        TenantConfiguration::new(
            tenant.id(),
            tenant.name().to_string(),
            tenant.name().to_string(),
            tenant.is_active(),
            tenant.connection_strings().clone(),
            tenant.extra_properties().clone(),
        )
    }

    fn deserialize(&self, record: &TenantConfiguration) -> Tenant {
        Tenant::restore(
            record.id(),
            record.name().to_string(),
            record.is_active(),
            record.connection_strings().clone(),
            record.extra_properties().clone(),
        )
    }
}
