//! Main application configuration

use super::{CacheConfig, EventBusConfig, LoggingConfig, TenantManagementConfig};
use serde::{Deserialize, Serialize};

/// Application configuration root
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Tenant configuration cache
    #[serde(default)]
    pub cache: CacheConfig,

    /// Tenant name rules and configuration caching
    #[serde(default)]
    pub tenant_management: TenantManagementConfig,

    /// Domain event bus
    #[serde(default)]
    pub event_bus: EventBusConfig,
}
