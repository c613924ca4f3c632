//! Permission group and permission records

use crate::value_objects::{ExtraProperties, MultiTenancySide};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Flat record of a permission group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionGroupDefinitionRecord {
    id: Uuid,
    name: String,
    display_name: String,
    #[serde(default)]
    extra_properties: ExtraProperties,
}

impl PermissionGroupDefinitionRecord {
    pub(crate) fn new(
        id: Uuid,
        name: String,
        display_name: String,
        extra_properties: ExtraProperties,
    ) -> Self {
        Self {
            id,
            name,
            display_name,
            extra_properties,
        }
    }

    /// Record identifier
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Group name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Encoded display name
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Custom properties
    pub fn extra_properties(&self) -> &ExtraProperties {
        &self.extra_properties
    }
}

/// Flat record of a permission
///
/// Nesting is expressed through [`parent_name`](Self::parent_name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionDefinitionRecord {
    id: Uuid,
    group_name: String,
    name: String,
    parent_name: Option<String>,
    display_name: String,
    is_enabled: bool,
    multi_tenancy_side: MultiTenancySide,
    providers: Option<String>,
    #[serde(default)]
    extra_properties: ExtraProperties,
}

impl PermissionDefinitionRecord {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: Uuid,
        group_name: String,
        name: String,
        parent_name: Option<String>,
        display_name: String,
        is_enabled: bool,
        multi_tenancy_side: MultiTenancySide,
        providers: Option<String>,
        extra_properties: ExtraProperties,
    ) -> Self {
        Self {
            id,
            group_name,
            name,
            parent_name,
            display_name,
            is_enabled,
            multi_tenancy_side,
            providers,
            extra_properties,
        }
    }

    /// Record identifier
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Name of the owning group
    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    /// Permission name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the parent permission, if nested
    pub fn parent_name(&self) -> Option<&str> {
        self.parent_name.as_deref()
    }

    /// Encoded display name
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Whether the permission is enabled
    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    /// Multi-tenancy side
    pub fn multi_tenancy_side(&self) -> MultiTenancySide {
        self.multi_tenancy_side
    }

    /// Comma-separated provider names, absent when unrestricted
    pub fn providers(&self) -> Option<&str> {
        self.providers.as_deref()
    }

    /// Custom properties
    pub fn extra_properties(&self) -> &ExtraProperties {
        &self.extra_properties
    }
}
