//! Configuration management
//!
//! Configuration is merged from defaults, a TOML file and `TNY__` prefixed
//! environment variables by [`ConfigLoader`].

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, CacheConfig, EventBusConfig, EventBusProvider, IdGeneratorKind, LoggingConfig,
    TenantManagementConfig,
};
