//! Tenant aggregate

use crate::constants::DEFAULT_CONNECTION_STRING_NAME;
use crate::value_objects::ExtraProperties;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A tenant of a multi-tenant application
///
/// Tenants are created by [`TenantManager::create`] and renamed only through
/// [`TenantManager::change_name`], which removes the cached configuration
/// keyed by the old name before the name changes.
///
/// [`TenantManager::create`]: crate::services::TenantManager::create
/// [`TenantManager::change_name`]: crate::services::TenantManager::change_name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    id: Uuid,
    name: String,
    is_active: bool,
    connection_strings: BTreeMap<String, String>,
    extra_properties: ExtraProperties,
}

impl Tenant {
    pub(crate) fn new(id: Uuid, name: String) -> Self {
        Self {
            id,
            name,
            is_active: true,
            connection_strings: BTreeMap::new(),
            extra_properties: ExtraProperties::new(),
        }
    }

    pub(crate) fn restore(
        id: Uuid,
        name: String,
        is_active: bool,
        connection_strings: BTreeMap<String, String>,
        extra_properties: ExtraProperties,
    ) -> Self {
        Self {
            id,
            name,
            is_active,
            connection_strings,
            extra_properties,
        }
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Tenant identifier
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current tenant name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the tenant is active
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Activate or deactivate the tenant
    pub fn set_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }

    /// All connection strings by name
    pub fn connection_strings(&self) -> &BTreeMap<String, String> {
        &self.connection_strings
    }

    /// Look up a named connection string
    pub fn connection_string(&self, name: &str) -> Option<&str> {
        self.connection_strings.get(name).map(String::as_str)
    }

    /// The default connection string, if configured
    pub fn default_connection_string(&self) -> Option<&str> {
        self.connection_string(DEFAULT_CONNECTION_STRING_NAME)
    }

    /// Set a named connection string
    pub fn set_connection_string<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        self.connection_strings.insert(name.into(), value.into());
    }

    /// Set the default connection string
    pub fn set_default_connection_string<V: Into<String>>(&mut self, value: V) {
        self.set_connection_string(DEFAULT_CONNECTION_STRING_NAME, value);
    }

    /// Remove a named connection string
    pub fn remove_connection_string(&mut self, name: &str) -> Option<String> {
        self.connection_strings.remove(name)
    }

    /// Custom properties
    pub fn extra_properties(&self) -> &ExtraProperties {
        &self.extra_properties
    }

    /// Mutable access to custom properties
    pub fn extra_properties_mut(&mut self) -> &mut ExtraProperties {
        &mut self.extra_properties
    }
}
