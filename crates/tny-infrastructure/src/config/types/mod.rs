//! Configuration types by section

pub mod app;
pub mod cache;
pub mod event_bus;
pub mod logging;
pub mod tenant;

pub use app::AppConfig;
pub use cache::CacheConfig;
pub use event_bus::{EventBusConfig, EventBusProvider};
pub use logging::LoggingConfig;
pub use tenant::{IdGeneratorKind, TenantManagementConfig};
