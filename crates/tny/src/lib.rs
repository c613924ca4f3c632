//! # Tenantry
//!
//! Tenant and permission definitions kept in a keyed cache that is
//! invalidated on every write that changes a key.
//!
//! ## Example
//!
//! ```ignore
//! use tny::infrastructure::{AppConfig, init_app};
//!
//! let context = init_app(AppConfig::default())?;
//! let service = context.tenant_service();
//!
//! let acme = service.create("Acme").await?;
//! service.get_configuration("Acme").await?; // cached as "tenant-config:acme"
//! service.rename(acme.id(), "Acme-Renamed").await?; // old entry removed
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Entities, records, serializers, the tenant manager and ports
//! - `application` - Tenant use cases and the cache provider registry
//! - `providers` - Moka, Redis and null caches, tenant store, event bus
//! - `infrastructure` - Configuration, logging and the composition root

/// Domain layer - entities, records, serializers and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use tny_domain::*;
}

/// Application layer - use cases and provider registry
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use tny_application::*;
}

/// Provider implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use tny_providers::*;
}

/// Infrastructure layer - config, logging and composition root
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use tny_infrastructure::*;
}

/// Command line interface
pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::{Error, Result};
pub use infrastructure::{AppConfig, AppContext, ConfigLoader, init_app};
