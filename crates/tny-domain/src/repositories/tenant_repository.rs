//! Tenant Repository Port

use crate::entities::Tenant;
use crate::error::Result;
use crate::value_objects::NameComparison;
use async_trait::async_trait;
use uuid::Uuid;

/// Persistence contract for tenants
///
/// The store is the final arbiter of name uniqueness: `insert` and `update`
/// must fail with [`Error::UniqueConstraint`](crate::Error::UniqueConstraint)
/// when another tenant already holds the name, and must perform that check
/// atomically with the write.
#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// Find a tenant by id
    async fn find(&self, id: Uuid) -> Result<Option<Tenant>>;

    /// Find a tenant by name under the given comparison
    async fn find_by_name(&self, name: &str, comparison: NameComparison) -> Result<Option<Tenant>>;

    /// Store a new tenant
    async fn insert(&self, tenant: &Tenant) -> Result<()>;

    /// Replace a stored tenant
    ///
    /// Fails with `NotFound` when no tenant has the id.
    async fn update(&self, tenant: &Tenant) -> Result<()>;

    /// Delete a tenant, returning whether it existed
    async fn delete(&self, id: Uuid) -> Result<bool>;

    /// Number of stored tenants
    async fn count(&self) -> Result<usize>;
}
