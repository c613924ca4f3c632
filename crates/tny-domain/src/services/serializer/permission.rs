//! Permission definition serializer
//!
//! Flattens the group/permission tree into records. Children reference
//! their parent through `parent_name`; record ids are UUID v5 values
//! derived from the definition name, so serialization has no side effects.

use super::RecordSerializer;
use crate::constants::{PERMISSION_PROVIDERS_SEPARATOR, RECORD_ID_NAMESPACE};
use crate::entities::{PermissionDefinition, PermissionDefinitionContext, PermissionGroupDefinition};
use crate::error::{EntityKind, Error, Result};
use crate::records::{PermissionDefinitionRecord, PermissionGroupDefinitionRecord};
use crate::value_objects::{LocalizableString, escape};
use std::collections::HashSet;
use uuid::Uuid;

/// Serializes permission groups and permissions into flat records
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionDefinitionSerializer;

impl PermissionDefinitionSerializer {
    /// Create a serializer
    pub fn new() -> Self {
        Self
    }

    /// Deterministic id of the record for the group called `name`
    pub fn group_record_id(name: &str) -> Uuid {
        Uuid::new_v5(&RECORD_ID_NAMESPACE, format!("group:{name}").as_bytes())
    }

    /// Deterministic id of the record for the permission called `name`
    pub fn permission_record_id(name: &str) -> Uuid {
        Uuid::new_v5(&RECORD_ID_NAMESPACE, format!("permission:{name}").as_bytes())
    }

    /// Build the record of a group
    pub fn serialize_group(&self, group: &PermissionGroupDefinition) -> PermissionGroupDefinitionRecord {
        PermissionGroupDefinitionRecord::new(
            Self::group_record_id(group.name()),
            group.name().to_string(),
            group.display_name().encode(),
            group.extra_properties().clone(),
        )
    }

    /// Rebuild a group, without its permissions
    pub fn deserialize_group(&self, record: &PermissionGroupDefinitionRecord) -> PermissionGroupDefinition {
        PermissionGroupDefinition::new(
            record.name().to_string(),
            Some(LocalizableString::decode(record.display_name())),
        )
        .with_extra_properties(record.extra_properties().clone())
    }

    /// Flatten every group and permission of a context, depth-first
    ///
    /// Fails with [`Error::DuplicateName`] when a permission name appears
    /// twice anywhere in the context, since records are linked by name.
    pub fn serialize_context(
        &self,
        context: &PermissionDefinitionContext,
    ) -> Result<(Vec<PermissionGroupDefinitionRecord>, Vec<PermissionDefinitionRecord>)> {
        context.validate()?;
        let mut groups = Vec::with_capacity(context.groups().len());
        let mut permissions = Vec::new();
        for group in context.groups() {
            groups.push(self.serialize_group(group));
            for permission in group.permissions() {
                self.flatten(permission, group, None, &mut permissions);
            }
        }
        Ok((groups, permissions))
    }

    fn flatten(
        &self,
        permission: &PermissionDefinition,
        group: &PermissionGroupDefinition,
        parent_name: Option<&str>,
        out: &mut Vec<PermissionDefinitionRecord>,
    ) {
        out.push(self.record(permission, group, parent_name));
        for child in permission.children() {
            self.flatten(child, group, Some(permission.name()), out);
        }
    }

    fn record(
        &self,
        permission: &PermissionDefinition,
        group: &PermissionGroupDefinition,
        parent_name: Option<&str>,
    ) -> PermissionDefinitionRecord {
        let providers = (!permission.providers().is_empty())
            .then(|| escape::join(permission.providers(), PERMISSION_PROVIDERS_SEPARATOR));
        PermissionDefinitionRecord::new(
            Self::permission_record_id(permission.name()),
            group.name().to_string(),
            permission.name().to_string(),
            parent_name.map(str::to_string),
            permission.display_name().encode(),
            permission.is_enabled(),
            permission.multi_tenancy_side(),
            providers,
            permission.extra_properties().clone(),
        )
    }

    /// Rebuild a context from flat records
    ///
    /// Permissions are attached to their group by `group_name` and to their
    /// parent by `parent_name`. Records referencing an unknown group or
    /// parent are rejected, as are duplicate names.
    pub fn deserialize_context(
        &self,
        groups: &[PermissionGroupDefinitionRecord],
        permissions: &[PermissionDefinitionRecord],
    ) -> Result<PermissionDefinitionContext> {
        let mut names = HashSet::new();
        for record in permissions {
            if !names.insert(record.name()) {
                return Err(Error::duplicate_name(EntityKind::Permission, record.name()));
            }
        }

        let mut context = PermissionDefinitionContext::new();
        for group_record in groups {
            if context.group(group_record.name()).is_some() {
                return Err(Error::duplicate_name(
                    EntityKind::PermissionGroup,
                    group_record.name(),
                ));
            }
            let mut group = self.deserialize_group(group_record);
            let records: Vec<&PermissionDefinitionRecord> = permissions
                .iter()
                .filter(|r| r.group_name() == group_record.name())
                .collect();

            let mut attached = 0;
            for root in records.iter().filter(|r| r.parent_name().is_none()) {
                group.push_permission(self.build_tree(root, &records, &mut attached));
            }
            if attached != records.len() {
                return Err(Error::validation(
                    "parent_name",
                    format!(
                        "group '{}' has permissions whose parent is missing",
                        group_record.name()
                    ),
                ));
            }
            context.push_group(group);
        }

        if let Some(orphan) = permissions
            .iter()
            .find(|r| context.group(r.group_name()).is_none())
        {
            return Err(Error::not_found(format!(
                "permission group '{}'",
                orphan.group_name()
            )));
        }
        Ok(context)
    }

    fn build_tree(
        &self,
        record: &PermissionDefinitionRecord,
        records: &[&PermissionDefinitionRecord],
        attached: &mut usize,
    ) -> PermissionDefinition {
        *attached += 1;
        let mut permission = self.deserialize(record);
        for child in records
            .iter()
            .filter(|r| r.parent_name() == Some(record.name()))
        {
            permission.push_child(self.build_tree(child, records, attached));
        }
        permission
    }
}

impl RecordSerializer for PermissionDefinitionSerializer {
    type Definition = PermissionDefinition;
    type Context = PermissionGroupDefinition;
    type Record = PermissionDefinitionRecord;

    fn serialize(
        &self,
        permission: &PermissionDefinition,
        group: &PermissionGroupDefinition,
    ) -> PermissionDefinitionRecord {
        self.record(permission, group, group.parent_of(permission.name()))
    }

    fn deserialize(&self, record: &PermissionDefinitionRecord) -> PermissionDefinition {
        let providers = record
            .providers()
            .map(|joined| {
                escape::split_all(joined, PERMISSION_PROVIDERS_SEPARATOR)
                    .into_iter()
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        PermissionDefinition::restore(
            record.name().to_string(),
            LocalizableString::decode(record.display_name()),
            record.multi_tenancy_side(),
            providers,
            record.is_enabled(),
            record.extra_properties().clone(),
        )
    }
}
