//! Tenant configuration cache item

use crate::constants::TENANT_CONFIGURATION_CACHE_KEY_PREFIX;
use crate::value_objects::ExtraProperties;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Cached snapshot of a tenant
///
/// Stored under [`TenantConfiguration::calculate_cache_key`] of the tenant
/// name at the time it was cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantConfiguration {
    id: Uuid,
    name: String,
    display_name: String,
    is_active: bool,
    #[serde(default)]
    connection_strings: BTreeMap<String, String>,
    #[serde(default)]
    extra_properties: ExtraProperties,
}

impl TenantConfiguration {
    pub(crate) fn new(
        id: Uuid,
        name: String,
        display_name: String,
        is_active: bool,
        connection_strings: BTreeMap<String, String>,
        extra_properties: ExtraProperties,
    ) -> Self {
        Self {
            id,
            name,
            display_name,
            is_active,
            connection_strings,
            extra_properties,
        }
    }

    /// Cache key for the configuration of the tenant called `name`
    ///
    /// Keys are lowercased so lookups under a case-insensitive policy share
    /// one entry. Readers must still compare the cached name.
    pub fn calculate_cache_key(name: &str) -> String {
        format!("{TENANT_CONFIGURATION_CACHE_KEY_PREFIX}{}", name.to_lowercase())
    }

    /// Cache key of this record
    pub fn cache_key(&self) -> String {
        Self::calculate_cache_key(&self.name)
    }

    /// Tenant identifier
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Tenant name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display name
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Whether the tenant is active
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Connection strings by name
    pub fn connection_strings(&self) -> &BTreeMap<String, String> {
        &self.connection_strings
    }

    /// Look up a named connection string
    pub fn connection_string(&self, name: &str) -> Option<&str> {
        self.connection_strings.get(name).map(String::as_str)
    }

    /// Custom properties
    pub fn extra_properties(&self) -> &ExtraProperties {
        &self.extra_properties
    }
}
