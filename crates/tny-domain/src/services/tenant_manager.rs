//! Tenant Manager
//!
//! Owns every write path that can change a tenant's name, so the cached
//! [`TenantConfiguration`] keyed by the old name is always removed before
//! the name changes.
//!
//! ## Rename ordering
//!
//! [`TenantManager::change_name`] validates, checks uniqueness, removes the
//! cache entry under the old key and only then assigns the new name. The
//! assignment happens after the last `.await`, so dropping the future at
//! any point leaves the tenant unchanged.

use crate::entities::Tenant;
use crate::error::{EntityKind, Error, Result};
use crate::ports::{DistributedCache, IdGenerator};
use crate::records::TenantConfiguration;
use crate::repositories::TenantRepository;
use crate::value_objects::TenantNamePolicy;
use std::sync::Arc;
use tracing::{debug, info};

/// Domain service that creates, renames and deletes tenants
#[derive(Clone)]
pub struct TenantManager {
    repository: Arc<dyn TenantRepository>,
    cache: DistributedCache<TenantConfiguration>,
    id_generator: Arc<dyn IdGenerator>,
    policy: TenantNamePolicy,
}

impl TenantManager {
    /// Create a manager with the default name policy
    pub fn new(
        repository: Arc<dyn TenantRepository>,
        cache: DistributedCache<TenantConfiguration>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            repository,
            cache,
            id_generator,
            policy: TenantNamePolicy::default(),
        }
    }

    /// Use a custom name policy
    pub fn with_policy(mut self, policy: TenantNamePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Name policy in effect
    pub fn policy(&self) -> &TenantNamePolicy {
        &self.policy
    }

    /// Tenant store
    pub fn repository(&self) -> &Arc<dyn TenantRepository> {
        &self.repository
    }

    /// Tenant configuration cache
    pub fn cache(&self) -> &DistributedCache<TenantConfiguration> {
        &self.cache
    }

    /// Create a new, unsaved tenant
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] when the name is blank or too long
    /// - [`Error::DuplicateName`] when a tenant with the name exists
    pub async fn create(&self, name: &str) -> Result<Tenant> {
        self.policy.validate(name)?;
        self.ensure_name_available(name, None).await?;

        let tenant = Tenant::new(self.id_generator.create(), name.to_string());
        debug!(tenant_id = %tenant.id(), name, "Tenant created");
        Ok(tenant)
    }

    /// Rename a tenant, invalidating the configuration cached under its old name
    ///
    /// Renaming to the current name is a no-op and touches neither the
    /// store nor the cache.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] when the new name is blank or too long
    /// - [`Error::DuplicateName`] when another tenant holds the new name
    /// - [`Error::CacheInvalidation`] when the old entry could not be removed;
    ///   the tenant keeps its old name
    pub async fn change_name(&self, tenant: &mut Tenant, new_name: &str) -> Result<()> {
        self.policy.validate(new_name)?;
        if tenant.name() == new_name {
            return Ok(());
        }
        self.ensure_name_available(new_name, Some(tenant)).await?;

        let old_key = TenantConfiguration::calculate_cache_key(tenant.name());
        self.remove_cached(&old_key).await?;

        info!(
            tenant_id = %tenant.id(),
            old_name = tenant.name(),
            new_name,
            "Tenant renamed"
        );
        tenant.set_name(new_name.to_string());
        Ok(())
    }

    /// Persist a tenant
    ///
    /// A store-level uniqueness violation is reported as
    /// [`Error::DuplicateName`], which settles concurrent creates of the
    /// same name.
    pub async fn save(&self, tenant: &Tenant, is_new: bool) -> Result<()> {
        let result = if is_new {
            self.repository.insert(tenant).await
        } else {
            self.repository.update(tenant).await
        };
        result.map_err(|e| match e {
            Error::UniqueConstraint { name } => Error::duplicate_name(EntityKind::Tenant, name),
            other => other,
        })
    }

    /// Remove the configuration cached for the tenant called `name`
    ///
    /// Returns whether an entry was present.
    pub async fn invalidate(&self, name: &str) -> Result<bool> {
        self.remove_cached(&TenantConfiguration::calculate_cache_key(name))
            .await
    }

    /// Delete a tenant and its cached configuration
    ///
    /// The cache entry is removed first so no stale configuration outlives
    /// the tenant.
    pub async fn delete(&self, tenant: &Tenant) -> Result<()> {
        self.invalidate(tenant.name()).await?;
        if !self.repository.delete(tenant.id()).await? {
            return Err(Error::not_found(format!("tenant {}", tenant.id())));
        }
        info!(tenant_id = %tenant.id(), name = tenant.name(), "Tenant deleted");
        Ok(())
    }

    async fn ensure_name_available(&self, name: &str, current: Option<&Tenant>) -> Result<()> {
        let existing = self
            .repository
            .find_by_name(name, self.policy.comparison)
            .await?;
        match existing {
            Some(other) if current.is_none_or(|t| t.id() != other.id()) => {
                Err(Error::duplicate_name(EntityKind::Tenant, name))
            }
            _ => Ok(()),
        }
    }

    async fn remove_cached(&self, key: &str) -> Result<bool> {
        let removed = self
            .cache
            .remove(key)
            .await
            .map_err(|e| Error::cache_invalidation(key, e))?;
        debug!(key, removed, "Tenant configuration cache entry invalidated");
        Ok(removed)
    }
}

impl std::fmt::Debug for TenantManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TenantManager")
            .field("cache", &self.cache)
            .field("id_generator", &self.id_generator)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
