//! Cache Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullCacheProvider`] | Disabled | Always misses |
//! | [`MokaCacheProvider`] | Local | In-process cache with per-entry TTL |
//! | [`RedisCacheProvider`] | Distributed | Redis-backed for multi-instance |
//!
//! ## Provider Selection Guide
//!
//! - **Caching disabled / tests**: `NullCacheProvider`
//! - **Single instance**: `MokaCacheProvider`
//! - **Multi instance**: `RedisCacheProvider`, so a rename on one node
//!   invalidates the entry for every node

#[cfg(feature = "cache-moka")]
pub mod moka;
pub mod null;
#[cfg(feature = "cache-redis")]
pub mod redis;

#[cfg(feature = "cache-moka")]
pub use self::moka::MokaCacheProvider;
pub use null::NullCacheProvider;
#[cfg(feature = "cache-redis")]
pub use self::redis::RedisCacheProvider;

pub use tny_domain::ports::{CacheEntryConfig, CacheStats};
