//! Tenant Store Implementations
//!
//! | Store | Description |
//! |-------|-------------|
//! | [`InMemoryTenantRepository`] | Process-local store for tests, demos and single-node hosts |

pub mod memory;

pub use memory::InMemoryTenantRepository;
