//! # Tenantry - Provider Implementations
//!
//! Implementations of the ports declared in `tny-domain`. Cache providers
//! register themselves into the `tny-application` registry at link time.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Cache | `CacheProvider` | Moka, Redis, Null |
//! | Tenant store | `TenantRepository` | InMemory |
//! | Identifiers | `IdGenerator` | Sequential (v7), Random (v4) |
//! | Events | `EventPublisher` | Tokio broadcast, Null |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! tny-providers = { version = "0.1", default-features = false, features = ["cache-redis"] }
//! ```

// Re-export tny-domain types commonly used with providers
pub use tny_domain::error::{Error, Result};
pub use tny_domain::ports::{CacheProvider, EventPublisher, IdGenerator};
pub use tny_domain::repositories::TenantRepository;

/// Provider-specific constants
pub mod constants;

/// Cache provider implementations
pub mod cache;

/// Event publisher implementations
pub mod events;

/// Identifier generators
pub mod id;

/// Tenant store implementations
pub mod repository;
