//! Cache configuration types

use crate::constants::{CACHE_DEFAULT_PROVIDER, CACHE_DISABLED_PROVIDER};
use serde::{Deserialize, Serialize};
use tny_application::ports::registry::CacheProviderConfig;
use tny_domain::ports::DEFAULT_CACHE_TTL_SECS;
use tny_providers::constants::CACHE_DEFAULT_MAX_ENTRIES;

/// Cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache enabled
    pub enabled: bool,

    /// Registered provider name ("moka", "redis", "null")
    pub provider: String,

    /// Default TTL in seconds
    pub default_ttl_secs: u64,

    /// Maximum number of entries (in-process providers)
    pub max_entries: u64,

    /// Redis URL (for the redis provider)
    pub redis_url: Option<String>,

    /// Namespace prepended to every key, empty for none
    pub namespace: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: CACHE_DEFAULT_PROVIDER.to_string(),
            default_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            max_entries: CACHE_DEFAULT_MAX_ENTRIES,
            redis_url: None,
            namespace: String::new(),
        }
    }
}

impl CacheConfig {
    /// Name of the provider to resolve, the null provider when disabled
    pub fn effective_provider(&self) -> &str {
        if self.enabled {
            &self.provider
        } else {
            CACHE_DISABLED_PROVIDER
        }
    }

    /// Registry configuration for the effective provider
    pub fn to_registry_config(&self) -> CacheProviderConfig {
        let mut config = CacheProviderConfig::new(self.effective_provider())
            .with_max_entries(self.max_entries)
            .with_ttl_secs(self.default_ttl_secs);
        if let Some(url) = &self.redis_url {
            config = config.with_uri(url.as_str());
        }
        config
    }
}
