//! Cache Provider Port
//!
//! Port for cache backend providers. Backends store JSON strings; the typed
//! [`DistributedCache`] view handles (de)serialization and key namespacing.
//!
//! Per-key operations are linearizable at the backend with last-write-wins
//! semantics. Removing an absent key is not an error.

use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

/// Default TTL for cache entries (20 minutes)
pub const DEFAULT_CACHE_TTL_SECS: u64 = 1200;

/// Cache Entry Configuration
///
/// # Example
///
/// ```
/// use tny_domain::ports::CacheEntryConfig;
/// use std::time::Duration;
///
/// let config = CacheEntryConfig::default().with_ttl_secs(600);
/// assert_eq!(config.effective_ttl(), Duration::from_secs(600));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntryConfig {
    /// Time to live for the cache entry
    pub ttl: Option<Duration>,
}

impl CacheEntryConfig {
    /// Create a new cache entry config with default TTL
    pub fn new() -> Self {
        Self {
            ttl: Some(Duration::from_secs(DEFAULT_CACHE_TTL_SECS)),
        }
    }

    /// Set the TTL for the cache entry
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Set TTL in seconds
    pub fn with_ttl_secs(self, secs: u64) -> Self {
        self.with_ttl(Duration::from_secs(secs))
    }

    /// Get the effective TTL, falling back to default
    pub fn effective_ttl(&self) -> Duration {
        self.ttl
            .unwrap_or(Duration::from_secs(DEFAULT_CACHE_TTL_SECS))
    }
}

impl Default for CacheEntryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache Operation Statistics
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of cache entries
    pub entries: u64,
    /// Cache hit rate (0.0 to 1.0)
    pub hit_rate: f64,
}

impl CacheStats {
    /// Build statistics from counters, computing the hit rate
    pub fn from_counters(hits: u64, misses: u64, entries: u64) -> Self {
        let mut stats = Self {
            hits,
            misses,
            entries,
            hit_rate: 0.0,
        };
        stats.hit_rate = stats.calculate_hit_rate();
        stats
    }

    /// Calculate hit rate from hits and misses
    pub fn calculate_hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        }
    }
}

/// Cache Provider Port
///
/// # Implementations
///
/// - **Moka**: In-process cache with per-entry TTL
/// - **Redis**: Distributed cache for multi-instance deployments
/// - **Null**: Always misses, for disabled caching and tests
#[async_trait]
pub trait CacheProvider: Send + Sync + fmt::Debug {
    /// Get a value from the cache as JSON string
    ///
    /// Returns `None` if the key is absent or expired.
    async fn get_json(&self, key: &str) -> Result<Option<String>>;

    /// Set a value in the cache from JSON string
    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()>;

    /// Delete a value from the cache
    ///
    /// Returns true if the key was deleted, false if it didn't exist.
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Check if a key exists in the cache
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Clear all values from the cache
    async fn clear(&self) -> Result<()>;

    /// Get cache statistics
    async fn stats(&self) -> Result<CacheStats>;

    /// Get the cache size (number of entries)
    async fn size(&self) -> Result<usize>;

    /// Name of this provider implementation (e.g. "moka", "redis", "null")
    fn provider_name(&self) -> &str;
}

/// Typed cache of `T` values stored as JSON in a [`CacheProvider`]
///
/// Keys are prefixed with `"{namespace}:"` when a namespace is set, so
/// several typed caches can share one backend.
pub struct DistributedCache<T> {
    provider: Arc<dyn CacheProvider>,
    namespace: Option<String>,
    default_ttl: Duration,
    _item: PhantomData<fn() -> T>,
}

impl<T> DistributedCache<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    /// Create a typed cache over `provider` with the default TTL
    pub fn new(provider: Arc<dyn CacheProvider>) -> Self {
        Self {
            provider,
            namespace: None,
            default_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            _item: PhantomData,
        }
    }

    /// Prefix every key with `namespace`
    pub fn with_namespace<S: Into<String>>(mut self, namespace: S) -> Self {
        let namespace = namespace.into();
        self.namespace = (!namespace.is_empty()).then_some(namespace);
        self
    }

    /// TTL applied when [`set`](Self::set) is called without one
    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }

    /// Underlying provider
    pub fn provider(&self) -> &Arc<dyn CacheProvider> {
        &self.provider
    }

    /// Key as stored in the backend
    pub fn full_key(&self, key: &str) -> String {
        match &self.namespace {
            Some(namespace) => format!("{namespace}:{key}"),
            None => key.to_string(),
        }
    }

    /// Get and deserialize a cached value
    ///
    /// A payload that does not deserialize as `T` is a [`Error::Cache`].
    pub async fn get(&self, key: &str) -> Result<Option<T>> {
        let full_key = self.full_key(key);
        match self.provider.get_json(&full_key).await? {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| Error::cache_with_source(format!("corrupt entry '{full_key}'"), e)),
            None => Ok(None),
        }
    }

    /// Serialize and store a value
    pub async fn set(&self, key: &str, value: &T, ttl: Option<Duration>) -> Result<()> {
        let json = serde_json::to_string(value)?;
        let config = CacheEntryConfig::new().with_ttl(ttl.unwrap_or(self.default_ttl));
        self.provider
            .set_json(&self.full_key(key), &json, config)
            .await
    }

    /// Remove a value, returning whether it was present
    pub async fn remove(&self, key: &str) -> Result<bool> {
        self.provider.delete(&self.full_key(key)).await
    }

    /// Check whether a value is cached
    pub async fn exists(&self, key: &str) -> Result<bool> {
        self.provider.exists(&self.full_key(key)).await
    }

    /// Return the cached value, or compute it with `factory` and cache it
    ///
    /// Nothing is cached when the factory yields `None`.
    pub async fn get_or_add<F, Fut>(
        &self,
        key: &str,
        factory: F,
        ttl: Option<Duration>,
    ) -> Result<Option<T>>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Result<Option<T>>> + Send,
    {
        if let Some(value) = self.get(key).await? {
            return Ok(Some(value));
        }
        let value = factory().await?;
        if let Some(value) = &value {
            self.set(key, value, ttl).await?;
        }
        Ok(value)
    }
}

impl<T> Clone for DistributedCache<T> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            namespace: self.namespace.clone(),
            default_ttl: self.default_ttl,
            _item: PhantomData,
        }
    }
}

impl<T> fmt::Debug for DistributedCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistributedCache")
            .field("provider", &self.provider.provider_name())
            .field("namespace", &self.namespace)
            .field("default_ttl", &self.default_ttl)
            .finish()
    }
}
