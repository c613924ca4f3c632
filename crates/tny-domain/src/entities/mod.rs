//! Domain Entities
//!
//! Mutable definitions owned by the application. Their cached
//! counterparts live in [`crate::records`].

pub mod permission;
pub mod tenant;

pub use permission::{PermissionDefinition, PermissionDefinitionContext, PermissionGroupDefinition};
pub use tenant::Tenant;
