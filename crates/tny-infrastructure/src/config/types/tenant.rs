//! Tenant management configuration types

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tny_domain::constants::TENANT_NAME_MAX_LENGTH;
use tny_domain::ports::DEFAULT_CACHE_TTL_SECS;
use tny_domain::value_objects::{NameComparison, TenantNamePolicy};

/// Identifier generator selection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdGeneratorKind {
    /// Time-ordered UUID v7
    #[default]
    Sequential,
    /// Random UUID v4
    Random,
}

/// Tenant management configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantManagementConfig {
    /// Comparison used for tenant name uniqueness
    pub name_comparison: NameComparison,

    /// Maximum tenant name length in characters
    pub max_name_length: usize,

    /// TTL of cached tenant configurations in seconds
    pub configuration_cache_ttl_secs: u64,

    /// Tenant id generator
    pub id_generator: IdGeneratorKind,
}

impl Default for TenantManagementConfig {
    fn default() -> Self {
        Self {
            name_comparison: NameComparison::default(),
            max_name_length: TENANT_NAME_MAX_LENGTH,
            configuration_cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            id_generator: IdGeneratorKind::default(),
        }
    }
}

impl TenantManagementConfig {
    /// Name policy described by this configuration
    pub fn name_policy(&self) -> TenantNamePolicy {
        TenantNamePolicy::new(self.name_comparison).with_max_length(self.max_name_length)
    }

    /// TTL of cached tenant configurations
    pub fn configuration_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.configuration_cache_ttl_secs)
    }
}
