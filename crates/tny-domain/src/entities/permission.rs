//! Permission definitions
//!
//! Permissions are declared in code by modules, organised in groups, and
//! may nest. A [`PermissionDefinitionContext`] collects the groups declared
//! by every module before they are serialized into records.
//!
//! # Example
//!
//! ```
//! use tny_domain::entities::PermissionDefinitionContext;
//! use tny_domain::value_objects::{LocalizableString, MultiTenancySide};
//!
//! let mut context = PermissionDefinitionContext::new();
//! let group = context.add_group("Billing", Some(LocalizableString::fixed("Billing")))?;
//! group
//!     .add_permission("Billing.Invoices", None, MultiTenancySide::Tenant)?
//!     .with_providers(["R", "U"])
//!     .with_property("Audit", "true");
//! # Ok::<(), tny_domain::Error>(())
//! ```

use crate::constants::PERMISSION_NAME_MAX_LENGTH;
use crate::error::{EntityKind, Error, Result};
use crate::value_objects::{ExtraProperties, LocalizableString, MultiTenancySide};
use std::collections::HashSet;

fn validate_definition_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::validation("name", "name cannot be empty"));
    }
    if name.chars().count() > PERMISSION_NAME_MAX_LENGTH {
        return Err(Error::validation(
            "name",
            format!("name exceeds {PERMISSION_NAME_MAX_LENGTH} characters"),
        ));
    }
    Ok(())
}

/// Collects permission groups declared by application modules
#[derive(Debug, Clone, Default)]
pub struct PermissionDefinitionContext {
    groups: Vec<PermissionGroupDefinition>,
}

impl PermissionDefinitionContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new group
    ///
    /// The display name defaults to the group name. Fails with
    /// [`Error::DuplicateName`] when the group already exists.
    pub fn add_group<S: Into<String>>(
        &mut self,
        name: S,
        display_name: Option<LocalizableString>,
    ) -> Result<&mut PermissionGroupDefinition> {
        let name = name.into();
        validate_definition_name(&name)?;
        if self.group(&name).is_some() {
            return Err(Error::duplicate_name(EntityKind::PermissionGroup, name));
        }
        self.groups
            .push(PermissionGroupDefinition::new(name, display_name));
        let index = self.groups.len() - 1;
        Ok(&mut self.groups[index])
    }

    /// Find a group by name
    pub fn group(&self, name: &str) -> Option<&PermissionGroupDefinition> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Find a group by name for modification
    pub fn group_mut(&mut self, name: &str) -> Option<&mut PermissionGroupDefinition> {
        self.groups.iter_mut().find(|g| g.name == name)
    }

    /// Remove a group, returning whether it existed
    pub fn remove_group(&mut self, name: &str) -> bool {
        let before = self.groups.len();
        self.groups.retain(|g| g.name != name);
        self.groups.len() != before
    }

    /// All groups in declaration order
    pub fn groups(&self) -> &[PermissionGroupDefinition] {
        &self.groups
    }

    /// Find a permission anywhere in the context
    pub fn find_permission(&self, name: &str) -> Option<&PermissionDefinition> {
        self.groups.iter().find_map(|g| g.find_permission(name))
    }

    /// Check that permission names are unique across all groups
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for permission in self.groups.iter().flat_map(|g| g.all_permissions()) {
            if !seen.insert(permission.name()) {
                return Err(Error::duplicate_name(
                    EntityKind::Permission,
                    permission.name(),
                ));
            }
        }
        Ok(())
    }

    pub(crate) fn push_group(&mut self, group: PermissionGroupDefinition) {
        self.groups.push(group);
    }
}

/// A named group of permissions
#[derive(Debug, Clone, PartialEq)]
pub struct PermissionGroupDefinition {
    name: String,
    display_name: LocalizableString,
    extra_properties: ExtraProperties,
    permissions: Vec<PermissionDefinition>,
}

impl PermissionGroupDefinition {
    pub(crate) fn new(name: String, display_name: Option<LocalizableString>) -> Self {
        let display_name = display_name.unwrap_or_else(|| LocalizableString::fixed(name.as_str()));
        Self {
            name,
            display_name,
            extra_properties: ExtraProperties::new(),
            permissions: Vec::new(),
        }
    }

    pub(crate) fn with_extra_properties(mut self, extra_properties: ExtraProperties) -> Self {
        self.extra_properties = extra_properties;
        self
    }

    /// Group name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Group display name
    pub fn display_name(&self) -> &LocalizableString {
        &self.display_name
    }

    /// Custom properties
    pub fn extra_properties(&self) -> &ExtraProperties {
        &self.extra_properties
    }

    /// Get a custom property
    pub fn property(&self, key: &str) -> Option<&str> {
        self.extra_properties.get(key)
    }

    /// Set a custom property
    pub fn set_property<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> &mut Self {
        self.extra_properties.set(key, value);
        self
    }

    /// Top-level permissions in declaration order
    pub fn permissions(&self) -> &[PermissionDefinition] {
        &self.permissions
    }

    /// Add a top-level permission
    ///
    /// Fails with [`Error::DuplicateName`] when the group already declares a
    /// permission (at any depth) with the same name.
    pub fn add_permission<S: Into<String>>(
        &mut self,
        name: S,
        display_name: Option<LocalizableString>,
        multi_tenancy_side: MultiTenancySide,
    ) -> Result<&mut PermissionDefinition> {
        let name = name.into();
        validate_definition_name(&name)?;
        if self.find_permission(&name).is_some() {
            return Err(Error::duplicate_name(EntityKind::Permission, name));
        }
        self.permissions
            .push(PermissionDefinition::new(name, display_name, multi_tenancy_side));
        let index = self.permissions.len() - 1;
        Ok(&mut self.permissions[index])
    }

    /// Find a permission at any depth
    pub fn find_permission(&self, name: &str) -> Option<&PermissionDefinition> {
        self.permissions.iter().find_map(|p| p.find(name))
    }

    /// Find a permission at any depth for modification
    pub fn find_permission_mut(&mut self, name: &str) -> Option<&mut PermissionDefinition> {
        self.permissions.iter_mut().find_map(|p| p.find_mut(name))
    }

    /// Name of the parent of the named permission, if it is nested
    pub fn parent_of(&self, name: &str) -> Option<&str> {
        self.permissions.iter().find_map(|p| p.parent_of(name))
    }

    /// All permissions, depth-first, parents before children
    pub fn all_permissions(&self) -> Vec<&PermissionDefinition> {
        let mut out = Vec::new();
        for permission in &self.permissions {
            permission.collect_into(&mut out);
        }
        out
    }

    pub(crate) fn push_permission(&mut self, permission: PermissionDefinition) {
        self.permissions.push(permission);
    }
}

/// A single permission, possibly with child permissions
#[derive(Debug, Clone, PartialEq)]
pub struct PermissionDefinition {
    name: String,
    display_name: LocalizableString,
    multi_tenancy_side: MultiTenancySide,
    providers: Vec<String>,
    is_enabled: bool,
    extra_properties: ExtraProperties,
    children: Vec<PermissionDefinition>,
}

impl PermissionDefinition {
    pub(crate) fn new(
        name: String,
        display_name: Option<LocalizableString>,
        multi_tenancy_side: MultiTenancySide,
    ) -> Self {
        let display_name = display_name.unwrap_or_else(|| LocalizableString::fixed(name.as_str()));
        Self {
            name,
            display_name,
            multi_tenancy_side,
            providers: Vec::new(),
            is_enabled: true,
            extra_properties: ExtraProperties::new(),
            children: Vec::new(),
        }
    }

    pub(crate) fn restore(
        name: String,
        display_name: LocalizableString,
        multi_tenancy_side: MultiTenancySide,
        providers: Vec<String>,
        is_enabled: bool,
        extra_properties: ExtraProperties,
    ) -> Self {
        Self {
            name,
            display_name,
            multi_tenancy_side,
            providers,
            is_enabled,
            extra_properties,
            children: Vec::new(),
        }
    }

    /// Permission name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Permission display name
    pub fn display_name(&self) -> &LocalizableString {
        &self.display_name
    }

    /// Side of the multi-tenant system the permission applies to
    pub fn multi_tenancy_side(&self) -> MultiTenancySide {
        self.multi_tenancy_side
    }

    /// Names of the permission value providers allowed to grant this permission
    ///
    /// Empty means every provider may grant it.
    pub fn providers(&self) -> &[String] {
        &self.providers
    }

    /// Whether the permission is enabled
    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    /// Custom properties
    pub fn extra_properties(&self) -> &ExtraProperties {
        &self.extra_properties
    }

    /// Get a custom property
    pub fn property(&self, key: &str) -> Option<&str> {
        self.extra_properties.get(key)
    }

    /// Child permissions
    pub fn children(&self) -> &[PermissionDefinition] {
        &self.children
    }

    /// Restrict the permission to the given providers
    ///
    /// Names are trimmed. Blank names and duplicates are skipped.
    pub fn with_providers<I, S>(&mut self, providers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for provider in providers {
            let provider = provider.as_ref().trim();
            if !provider.is_empty() && !self.providers.iter().any(|p| p == provider) {
                self.providers.push(provider.to_string());
            }
        }
        self
    }

    /// Set a custom property
    pub fn with_property<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> &mut Self {
        self.extra_properties.set(key, value);
        self
    }

    /// Enable or disable the permission
    pub fn set_enabled(&mut self, is_enabled: bool) -> &mut Self {
        self.is_enabled = is_enabled;
        self
    }

    /// Add a child permission
    ///
    /// Fails with [`Error::DuplicateName`] when this subtree already declares
    /// the name. Uniqueness across the whole context is checked by
    /// [`PermissionDefinitionContext::validate`].
    pub fn add_child<S: Into<String>>(
        &mut self,
        name: S,
        display_name: Option<LocalizableString>,
        multi_tenancy_side: MultiTenancySide,
    ) -> Result<&mut PermissionDefinition> {
        let name = name.into();
        validate_definition_name(&name)?;
        if self.find(&name).is_some() {
            return Err(Error::duplicate_name(EntityKind::Permission, name));
        }
        self.children
            .push(PermissionDefinition::new(name, display_name, multi_tenancy_side));
        let index = self.children.len() - 1;
        Ok(&mut self.children[index])
    }

    fn find(&self, name: &str) -> Option<&PermissionDefinition> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut PermissionDefinition> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(name))
    }

    fn parent_of(&self, name: &str) -> Option<&str> {
        if self.children.iter().any(|c| c.name == name) {
            return Some(&self.name);
        }
        self.children.iter().find_map(|c| c.parent_of(name))
    }

    fn collect_into<'a>(&'a self, out: &mut Vec<&'a PermissionDefinition>) {
        out.push(self);
        for child in &self.children {
            child.collect_into(out);
        }
    }

    pub(crate) fn push_child(&mut self, child: PermissionDefinition) {
        self.children.push(child);
    }
}
