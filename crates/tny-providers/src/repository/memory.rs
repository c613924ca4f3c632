//! In-memory tenant repository
//!
//! A single `RwLock` guards the id map. Writes check name uniqueness and
//! store the tenant under the same write lock, so this store is the final
//! arbiter when two callers race to claim one name.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tny_domain::entities::Tenant;
use tny_domain::error::{Error, Result};
use tny_domain::repositories::TenantRepository;
use tny_domain::value_objects::NameComparison;
use uuid::Uuid;

/// Tenant repository kept in process memory
#[derive(Debug, Default)]
pub struct InMemoryTenantRepository {
    tenants: RwLock<HashMap<Uuid, Tenant>>,
    comparison: NameComparison,
}

impl InMemoryTenantRepository {
    /// Create an empty, case-sensitive store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store enforcing uniqueness under `comparison`
    pub fn with_comparison(comparison: NameComparison) -> Self {
        Self {
            tenants: RwLock::new(HashMap::new()),
            comparison,
        }
    }

    /// Comparison used for the uniqueness constraint
    pub fn comparison(&self) -> NameComparison {
        self.comparison
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<Uuid, Tenant>>> {
        self.tenants
            .read()
            .map_err(|_| Error::internal("tenant store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<Uuid, Tenant>>> {
        self.tenants
            .write()
            .map_err(|_| Error::internal("tenant store lock poisoned"))
    }

    fn ensure_unique(&self, tenants: &HashMap<Uuid, Tenant>, tenant: &Tenant) -> Result<()> {
        let taken = tenants.values().any(|other| {
            other.id() != tenant.id() && self.comparison.matches(other.name(), tenant.name())
        });
        if taken {
            return Err(Error::unique_constraint(tenant.name()));
        }
        Ok(())
    }
}

#[async_trait]
impl TenantRepository for InMemoryTenantRepository {
    async fn find(&self, id: Uuid) -> Result<Option<Tenant>> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str, comparison: NameComparison) -> Result<Option<Tenant>> {
        Ok(self
            .read()?
            .values()
            .find(|tenant| comparison.matches(tenant.name(), name))
            .cloned())
    }

    async fn insert(&self, tenant: &Tenant) -> Result<()> {
        let mut tenants = self.write()?;
        if tenants.contains_key(&tenant.id()) {
            return Err(Error::internal(format!(
                "tenant {} is already stored",
                tenant.id()
            )));
        }
        self.ensure_unique(&tenants, tenant)?;
        tenants.insert(tenant.id(), tenant.clone());
        Ok(())
    }

    async fn update(&self, tenant: &Tenant) -> Result<()> {
        let mut tenants = self.write()?;
        if !tenants.contains_key(&tenant.id()) {
            return Err(Error::not_found(format!("tenant {}", tenant.id())));
        }
        self.ensure_unique(&tenants, tenant)?;
        tenants.insert(tenant.id(), tenant.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        Ok(self.write()?.remove(&id).is_some())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }
}
