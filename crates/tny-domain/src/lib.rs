//! Domain Layer - Tenantry
//!
//! Core business types for tenant and permission definitions, their
//! immutable cache records, and the rules that keep the two consistent.
//!
//! ## Architecture
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Mutable definitions (tenants, permission groups and permissions) |
//! | [`records`] | Immutable, serializable snapshots produced by the serializers |
//! | [`value_objects`] | Property bags, localizable strings, name policies |
//! | [`services`] | Domain services: [`TenantManager`](services::TenantManager) and record serializers |
//! | [`ports`] | Contracts for cache providers and identifier generation |
//! | [`repositories`] | Persistence contracts for tenants |
//! | [`events`] | Domain events published after committed changes |
//! | [`error`] | Typed errors with machine-readable codes |
//!
//! ## Dependencies
//!
//! This crate depends only on pure libraries (serde, thiserror, uuid,
//! async-trait, tracing). Cache backends and stores live in `tny-providers`.

pub mod constants;
pub mod entities;
pub mod error;
pub mod events;
pub mod ports;
pub mod records;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use error::{EntityKind, Error, Result};
