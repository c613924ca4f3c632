//! Multi-tenancy side of a permission

use serde::{Deserialize, Serialize};

/// Which side of a multi-tenant system a permission is granted on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiTenancySide {
    /// Only inside a tenant
    Tenant,
    /// Only on the host
    Host,
    /// Both tenant and host
    #[default]
    Both,
}

impl MultiTenancySide {
    /// Whether the permission is available to tenants
    pub fn includes_tenant(self) -> bool {
        matches!(self, Self::Tenant | Self::Both)
    }

    /// Whether the permission is available to the host
    pub fn includes_host(self) -> bool {
        matches!(self, Self::Host | Self::Both)
    }
}
