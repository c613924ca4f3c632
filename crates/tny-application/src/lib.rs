//! Application Layer - Tenantry
//!
//! Use cases that orchestrate the domain [`TenantManager`] with the tenant
//! store, the configuration cache and the event publisher.
//!
//! ## Use Cases
//!
//! - Tenant lifecycle: create, rename, activate, delete
//! - Read-through lookup of cached tenant configuration
//!
//! ## Ports
//!
//! - `ports::services::*`: Use case interfaces
//! - `ports::registry::*`: linkme registry for cache providers
//!
//! ## Dependencies
//!
//! This crate depends only on `tny-domain` and pure Rust libraries.
//! Providers register into [`ports::registry`] from `tny-providers`.
//!
//! [`TenantManager`]: tny_domain::services::TenantManager

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
