//! Repository Ports

pub mod tenant_repository;

pub use tenant_repository::TenantRepository;
