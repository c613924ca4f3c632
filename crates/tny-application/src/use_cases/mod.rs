//! Use Case Implementations

pub mod tenant_service;

pub use tenant_service::TenantServiceImpl;
