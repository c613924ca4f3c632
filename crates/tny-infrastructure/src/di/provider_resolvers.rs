//! Provider Resolvers
//!
//! Wrap the linkme registry lookups with the application configuration.

use crate::config::AppConfig;
use std::sync::Arc;
use tny_application::ports::registry::{list_cache_providers, resolve_cache_provider};
use tny_domain::ports::CacheProvider;

/// Resolver for cache providers
///
/// Resolves the provider named by the current config.
/// A disabled cache resolves to the null provider.
pub struct CacheProviderResolver {
    config: Arc<AppConfig>,
}

impl CacheProviderResolver {
    /// Create a new resolver with config
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// Resolve provider from current application config
    pub fn resolve_from_config(&self) -> Result<Arc<dyn CacheProvider>, String> {
        resolve_cache_provider(&self.config.cache.to_registry_config())
    }

    /// List available cache providers
    pub fn list_available(&self) -> Vec<(&'static str, &'static str)> {
        list_cache_providers()
    }
}

impl std::fmt::Debug for CacheProviderResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheProviderResolver")
            .field("provider", &self.config.cache.effective_provider())
            .finish()
    }
}
