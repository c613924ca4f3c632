//! Application Ports
//!
//! - **services** - Use case interfaces implemented in [`crate::use_cases`]
//! - **registry** - Compile-time provider registration (linkme)

pub mod registry;
pub mod services;

pub use registry::{
    CACHE_PROVIDERS, CacheProviderConfig, CacheProviderEntry, list_cache_providers,
    resolve_cache_provider,
};
pub use services::TenantServiceInterface;
