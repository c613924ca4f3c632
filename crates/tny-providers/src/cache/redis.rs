//! Redis distributed cache provider
//!
//! Shared cache for multi-instance deployments: an entry removed by one
//! instance is gone for all of them.
//!
//! ## Example
//!
//! ```ignore
//! use tny_providers::cache::RedisCacheProvider;
//!
//! let provider = RedisCacheProvider::new("redis://localhost:6379")?;
//! ```

use crate::constants::REDIS_DEFAULT_URI;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::MultiplexedConnection};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tny_application::ports::registry::{CACHE_PROVIDERS, CacheProviderConfig, CacheProviderEntry};
use tny_domain::error::{Error, Result};
use tny_domain::ports::{CacheEntryConfig, CacheProvider, CacheStats};

/// Redis cache provider
///
/// Uses multiplexed connections for efficient connection reuse.
#[derive(Clone)]
pub struct RedisCacheProvider {
    client: Client,
    address: String,
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
}

impl RedisCacheProvider {
    /// Create a new Redis cache provider with connection string
    ///
    /// The connection is established lazily on first use.
    pub fn new(connection_string: &str) -> Result<Self> {
        let client = Client::open(connection_string)
            .map_err(|e| Error::infrastructure_with_source("Failed to create Redis client", e))?;

        // Credentials stay out of logs and Debug output
        let address = connection_string
            .rsplit_once('@')
            .map_or(connection_string, |(_, host)| host)
            .trim_start_matches("redis://")
            .to_string();

        Ok(Self {
            client,
            address,
            hits: Arc::new(AtomicU64::new(0)),
            misses: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Create a new Redis cache provider with host and port
    pub fn with_host_port(host: &str, port: u16) -> Result<Self> {
        Self::new(&format!("redis://{host}:{port}"))
    }

    async fn get_connection(&self) -> Result<MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| Error::cache_with_source("Failed to get Redis connection", e))
    }

    /// Redis server address, without credentials
    pub fn server_address(&self) -> &str {
        &self.address
    }
}

#[async_trait]
impl CacheProvider for RedisCacheProvider {
    async fn get_json(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.get_connection().await?;

        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| Error::cache_with_source("Redis GET failed", e))?;
        let counter = if value.is_some() { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
        Ok(value)
    }

    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()> {
        let mut conn = self.get_connection().await?;

        let ttl_seconds = config.effective_ttl().as_secs();
        let result: redis::RedisResult<()> = if ttl_seconds > 0 {
            conn.set_ex(key, value, ttl_seconds).await
        } else {
            conn.set(key, value).await
        };

        result.map_err(|e| Error::cache_with_source("Redis SET failed", e))
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.get_connection().await?;

        let deleted: i64 = conn
            .del(key)
            .await
            .map_err(|e| Error::cache_with_source("Redis DEL failed", e))?;
        Ok(deleted > 0)
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let mut conn = self.get_connection().await?;

        conn.exists(key)
            .await
            .map_err(|e| Error::cache_with_source("Redis EXISTS failed", e))
    }

    async fn clear(&self) -> Result<()> {
        let mut conn = self.get_connection().await?;

        redis::cmd("FLUSHDB")
            .query_async(&mut conn)
            .await
            .map_err(|e| Error::cache_with_source("Redis FLUSHDB failed", e))
    }

    async fn stats(&self) -> Result<CacheStats> {
        let entries = self.size().await? as u64;
        Ok(CacheStats::from_counters(
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
            entries,
        ))
    }

    async fn size(&self) -> Result<usize> {
        let mut conn = self.get_connection().await?;

        redis::cmd("DBSIZE")
            .query_async(&mut conn)
            .await
            .map_err(|e| Error::cache_with_source("Redis DBSIZE failed", e))
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheProvider")
            .field("server", &self.server_address())
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn redis_cache_factory(
    config: &CacheProviderConfig,
) -> std::result::Result<Arc<dyn CacheProvider>, String> {
    let uri = config.uri.as_deref().unwrap_or(REDIS_DEFAULT_URI);

    let provider = RedisCacheProvider::new(uri)
        .map_err(|e| format!("Failed to create Redis provider: {e}"))?;

    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(CACHE_PROVIDERS)]
static REDIS_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: "redis",
    description: "Redis distributed cache",
    factory: redis_cache_factory,
};
