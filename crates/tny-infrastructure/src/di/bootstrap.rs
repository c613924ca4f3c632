//! Application bootstrap
//!
//! Builds the [`AppContext`] from an [`AppConfig`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(ConfigLoader::new().load()?)?;
//!
//! let tenant = context.tenant_service().create("Acme").await?;
//! let configuration = context.tenant_service().get_configuration("Acme").await?;
//! ```

use crate::config::{AppConfig, EventBusProvider, IdGeneratorKind};
use crate::di::provider_resolvers::CacheProviderResolver;
use crate::error_ext::registry_error;
use std::sync::Arc;
use std::time::Duration;
use tny_application::ports::services::TenantServiceInterface;
use tny_application::use_cases::TenantServiceImpl;
use tny_domain::error::Result;
use tny_domain::ports::{CacheProvider, DistributedCache, EventPublisher, IdGenerator};
use tny_domain::records::TenantConfiguration;
use tny_domain::repositories::TenantRepository;
use tny_domain::services::{PermissionDefinitionSerializer, TenantManager};
use tny_providers::events::{DomainEventStream, NullEventPublisher, TokioBroadcastEventBus};
use tny_providers::id::{RandomIdGenerator, SequentialIdGenerator};
use tny_providers::repository::InMemoryTenantRepository;
use tracing::info;

/// Application context holding the wired services
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    cache_resolver: Arc<CacheProviderResolver>,
    cache_provider: Arc<dyn CacheProvider>,
    repository: Arc<dyn TenantRepository>,
    id_generator: Arc<dyn IdGenerator>,
    event_bus: Option<Arc<TokioBroadcastEventBus>>,
    event_publisher: Arc<dyn EventPublisher>,
    tenant_manager: TenantManager,
    tenant_service: Arc<dyn TenantServiceInterface>,
    permission_serializer: PermissionDefinitionSerializer,
}

impl AppContext {
    /// Get the cache provider resolver
    pub fn cache_resolver(&self) -> Arc<CacheProviderResolver> {
        Arc::clone(&self.cache_resolver)
    }

    /// Get the resolved cache provider
    pub fn cache_provider(&self) -> Arc<dyn CacheProvider> {
        Arc::clone(&self.cache_provider)
    }

    /// Get the tenant store
    pub fn repository(&self) -> Arc<dyn TenantRepository> {
        Arc::clone(&self.repository)
    }

    /// Get the tenant id generator
    pub fn id_generator(&self) -> Arc<dyn IdGenerator> {
        Arc::clone(&self.id_generator)
    }

    /// Get the event publisher
    pub fn event_publisher(&self) -> Arc<dyn EventPublisher> {
        Arc::clone(&self.event_publisher)
    }

    /// Subscribe to domain events
    ///
    /// Returns `None` when the null event bus is configured.
    pub fn subscribe(&self) -> Option<DomainEventStream> {
        self.event_bus.as_ref().map(|bus| bus.subscribe())
    }

    /// Get the tenant manager
    pub fn tenant_manager(&self) -> &TenantManager {
        &self.tenant_manager
    }

    /// Get the tenant service
    pub fn tenant_service(&self) -> Arc<dyn TenantServiceInterface> {
        Arc::clone(&self.tenant_service)
    }

    /// Get the permission definition serializer
    pub fn permission_serializer(&self) -> PermissionDefinitionSerializer {
        self.permission_serializer
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("cache", &self.cache_provider)
            .field("id_generator", &self.id_generator)
            .field("tenant_manager", &self.tenant_manager)
            .finish_non_exhaustive()
    }
}

/// Initialize the application context with an in-memory tenant store
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let repository = Arc::new(InMemoryTenantRepository::with_comparison(
        config.tenant_management.name_comparison,
    ));
    init_app_with(config, repository)
}

/// Initialize the application context over a host-provided tenant store
///
/// Cache providers are registered via linkme when `tny-providers` is
/// linked. No explicit registration call is needed.
pub fn init_app_with(
    config: AppConfig,
    repository: Arc<dyn TenantRepository>,
) -> Result<AppContext> {
    info!("Initializing application context");
    let config = Arc::new(config);

    let cache_resolver = Arc::new(CacheProviderResolver::new(Arc::clone(&config)));
    let cache_provider = cache_resolver
        .resolve_from_config()
        .map_err(|e| registry_error("cache", e))?;

    let id_generator: Arc<dyn IdGenerator> = match config.tenant_management.id_generator {
        IdGeneratorKind::Sequential => Arc::new(SequentialIdGenerator),
        IdGeneratorKind::Random => Arc::new(RandomIdGenerator),
    };

    let event_bus = match config.event_bus.provider {
        EventBusProvider::Tokio => Some(Arc::new(TokioBroadcastEventBus::with_capacity(
            config.event_bus.capacity,
        ))),
        EventBusProvider::Null => None,
    };
    let event_publisher: Arc<dyn EventPublisher> = match &event_bus {
        Some(bus) => Arc::clone(bus) as Arc<dyn EventPublisher>,
        None => Arc::new(NullEventPublisher::new()),
    };

    let cache: DistributedCache<TenantConfiguration> =
        DistributedCache::new(Arc::clone(&cache_provider))
            .with_namespace(config.cache.namespace.as_str())
            .with_default_ttl(Duration::from_secs(config.cache.default_ttl_secs));
    let tenant_manager =
        TenantManager::new(Arc::clone(&repository), cache, Arc::clone(&id_generator))
            .with_policy(config.tenant_management.name_policy());

    let tenant_service: Arc<dyn TenantServiceInterface> = Arc::new(
        TenantServiceImpl::new(tenant_manager.clone(), Arc::clone(&event_publisher))
            .with_configuration_ttl(config.tenant_management.configuration_cache_ttl()),
    );

    info!(
        cache = cache_provider.provider_name(),
        events = ?config.event_bus.provider,
        comparison = ?config.tenant_management.name_comparison,
        "Application context ready"
    );

    Ok(AppContext {
        config,
        cache_resolver,
        cache_provider,
        repository,
        id_generator,
        event_bus,
        event_publisher,
        tenant_manager,
        tenant_service,
        permission_serializer: PermissionDefinitionSerializer::new(),
    })
}
