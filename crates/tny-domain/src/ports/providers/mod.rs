//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | CacheProvider | String-valued cache backend (Moka, Redis, Null) |
//! | DistributedCache | Typed JSON view over a cache provider |

/// Cache provider port
pub mod cache;

pub use cache::{
    CacheEntryConfig, CacheProvider, CacheStats, DEFAULT_CACHE_TTL_SECS, DistributedCache,
};
