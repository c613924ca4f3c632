//! Application Service Port Interfaces

use async_trait::async_trait;
use tny_domain::entities::Tenant;
use tny_domain::error::Result;
use tny_domain::records::TenantConfiguration;
use uuid::Uuid;

// ============================================================================
// Tenant Service Interface
// ============================================================================

/// Tenant Service Interface
///
/// Every write that changes what a cached [`TenantConfiguration`] would
/// contain also removes that entry.
#[async_trait]
pub trait TenantServiceInterface: Send + Sync {
    /// Create and store a tenant
    async fn create(&self, name: &str) -> Result<Tenant>;

    /// Rename a tenant
    async fn rename(&self, id: Uuid, new_name: &str) -> Result<Tenant>;

    /// Activate or deactivate a tenant
    async fn set_active(&self, id: Uuid, is_active: bool) -> Result<Tenant>;

    /// Set a named connection string
    async fn set_connection_string(&self, id: Uuid, name: &str, value: &str) -> Result<Tenant>;

    /// Delete a tenant
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Find a tenant by id
    async fn get(&self, id: Uuid) -> Result<Option<Tenant>>;

    /// Find a tenant by name under the configured comparison
    async fn find_by_name(&self, name: &str) -> Result<Option<Tenant>>;

    /// Configuration of the tenant called `name`, served from cache when possible
    async fn get_configuration(&self, name: &str) -> Result<Option<TenantConfiguration>>;
}
