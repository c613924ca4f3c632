//! Tenant Service Use Case
//!
//! Application service over the domain [`TenantManager`]. Persists changes,
//! keeps the tenant configuration cache consistent and publishes events.
//!
//! ## Cache consistency
//!
//! A reader can repopulate the old key between the manager's invalidation
//! and the commit of a rename. The service therefore removes the old key a
//! second time once the rename is stored. A reader slower than that is
//! bounded by the configured TTL.

use crate::ports::services::TenantServiceInterface;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tny_domain::entities::Tenant;
use tny_domain::error::{Error, Result};
use tny_domain::events::DomainEvent;
use tny_domain::ports::EventPublisher;
use tny_domain::records::TenantConfiguration;
use tny_domain::services::{RecordSerializer, TenantConfigurationSerializer, TenantManager};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Tenant service implementation
pub struct TenantServiceImpl {
    manager: TenantManager,
    serializer: TenantConfigurationSerializer,
    events: Arc<dyn EventPublisher>,
    configuration_ttl: Option<Duration>,
}

impl TenantServiceImpl {
    /// Create new tenant service with injected dependencies
    pub fn new(manager: TenantManager, events: Arc<dyn EventPublisher>) -> Self {
        Self {
            manager,
            serializer: TenantConfigurationSerializer::new(),
            events,
            configuration_ttl: None,
        }
    }

    /// TTL of cached tenant configurations, overriding the cache default
    pub fn with_configuration_ttl(mut self, ttl: Duration) -> Self {
        self.configuration_ttl = Some(ttl);
        self
    }

    /// Underlying domain manager
    pub fn manager(&self) -> &TenantManager {
        &self.manager
    }

    async fn load(&self, id: Uuid) -> Result<Tenant> {
        self.manager
            .repository()
            .find(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("tenant {id}")))
    }

    /// Store a non-name change and drop the now stale configuration
    async fn commit_update(&self, tenant: &Tenant) -> Result<()> {
        self.manager.save(tenant, false).await?;
        self.invalidate(tenant.name()).await
    }

    async fn invalidate(&self, name: &str) -> Result<()> {
        if self.manager.invalidate(name).await? {
            self.publish(DomainEvent::CacheInvalidated {
                key: TenantConfiguration::calculate_cache_key(name),
            })
            .await;
        }
        Ok(())
    }

    async fn publish(&self, event: DomainEvent) {
        if !self.events.has_subscribers() {
            return;
        }
        let name = event.name();
        if let Err(e) = self.events.publish(event).await {
            warn!(event = name, error = %e, "Failed to publish domain event");
        }
    }
}

#[async_trait]
impl TenantServiceInterface for TenantServiceImpl {
    async fn create(&self, name: &str) -> Result<Tenant> {
        let tenant = self.manager.create(name).await?;
        self.manager.save(&tenant, true).await?;
        info!(tenant_id = %tenant.id(), name, "Tenant stored");

        self.publish(DomainEvent::TenantCreated {
            id: tenant.id(),
            name: tenant.name().to_string(),
        })
        .await;
        Ok(tenant)
    }

    async fn rename(&self, id: Uuid, new_name: &str) -> Result<Tenant> {
        let mut tenant = self.load(id).await?;
        let old_name = tenant.name().to_string();

        self.manager.change_name(&mut tenant, new_name).await?;
        if tenant.name() == old_name {
            return Ok(tenant);
        }
        self.manager.save(&tenant, false).await?;
        self.invalidate(&old_name).await?;

        self.publish(DomainEvent::TenantRenamed {
            id,
            old_name,
            new_name: tenant.name().to_string(),
        })
        .await;
        Ok(tenant)
    }

    async fn set_active(&self, id: Uuid, is_active: bool) -> Result<Tenant> {
        let mut tenant = self.load(id).await?;
        tenant.set_active(is_active);
        self.commit_update(&tenant).await?;
        debug!(tenant_id = %id, is_active, "Tenant activation changed");
        Ok(tenant)
    }

    async fn set_connection_string(&self, id: Uuid, name: &str, value: &str) -> Result<Tenant> {
        let mut tenant = self.load(id).await?;
        tenant.set_connection_string(name, value);
        self.commit_update(&tenant).await?;
        debug!(tenant_id = %id, connection = name, "Tenant connection string changed");
        Ok(tenant)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let tenant = self.load(id).await?;
        self.manager.delete(&tenant).await?;

        self.publish(DomainEvent::TenantDeleted {
            id,
            name: tenant.name().to_string(),
        })
        .await;
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Tenant>> {
        self.manager.repository().find(id).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Tenant>> {
        self.manager
            .repository()
            .find_by_name(name, self.manager.policy().comparison)
            .await
    }

    async fn get_configuration(&self, name: &str) -> Result<Option<TenantConfiguration>> {
        let comparison = self.manager.policy().comparison;
        let key = TenantConfiguration::calculate_cache_key(name);

        // Keys are lowercased, so a hit only counts if the cached name matches.
        match self.manager.cache().get(&key).await {
            Ok(Some(configuration)) if comparison.matches(configuration.name(), name) => {
                debug!(key = %key, "Tenant configuration cache hit");
                return Ok(Some(configuration));
            }
            Ok(_) => debug!(key = %key, "Tenant configuration cache miss"),
            Err(e) => warn!(key = %key, error = %e, "Tenant configuration cache read failed"),
        }

        let Some(tenant) = self.find_by_name(name).await? else {
            return Ok(None);
        };
        let configuration = self.serializer.serialize(&tenant, &());
        if let Err(e) = self
            .manager
            .cache()
            .set(&key, &configuration, self.configuration_ttl)
            .await
        {
            warn!(key = %key, error = %e, "Failed to cache tenant configuration");
        }
        Ok(Some(configuration))
    }
}
