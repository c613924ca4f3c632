//! Domain Port Interfaces
//!
//! Boundary contracts implemented by outer layers. Domain services depend
//! only on these traits, injected as `Arc<dyn ...>`.
//!
//! ## Organization
//!
//! - **providers/** - Cache backends and the typed [`DistributedCache`] view
//! - **infrastructure/** - Identifier generation and event publishing

/// Infrastructure service ports
pub mod infrastructure;
/// External service provider ports
pub mod providers;

pub use infrastructure::{EventPublisher, IdGenerator};
pub use providers::{
    CacheEntryConfig, CacheProvider, CacheStats, DEFAULT_CACHE_TTL_SECS, DistributedCache,
};
