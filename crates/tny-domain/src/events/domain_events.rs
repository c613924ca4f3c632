//! Tenant lifecycle events

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events published after tenant changes are committed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A tenant was created and stored
    TenantCreated {
        /// Tenant identifier
        id: Uuid,
        /// Tenant name
        name: String,
    },
    /// A tenant was renamed
    TenantRenamed {
        /// Tenant identifier
        id: Uuid,
        /// Name before the rename
        old_name: String,
        /// Name after the rename
        new_name: String,
    },
    /// A tenant was deleted
    TenantDeleted {
        /// Tenant identifier
        id: Uuid,
        /// Name at deletion time
        name: String,
    },
    /// A cache entry was removed
    CacheInvalidated {
        /// Removed cache key
        key: String,
    },
}

impl DomainEvent {
    /// Short event name, used as the log target field
    pub fn name(&self) -> &'static str {
        match self {
            Self::TenantCreated { .. } => "tenant_created",
            Self::TenantRenamed { .. } => "tenant_renamed",
            Self::TenantDeleted { .. } => "tenant_deleted",
            Self::CacheInvalidated { .. } => "cache_invalidated",
        }
    }
}
