//! Composition root
//!
//! Providers are resolved by name from the linkme registries declared in
//! `tny-application`, then wired into the domain manager and the
//! application services.
//!
//! ```text
//! AppConfig → CacheProviderResolver → linkme registry → Arc<dyn CacheProvider>
//!                                                              ↓
//!                 TenantRepository, IdGenerator → TenantManager → TenantServiceImpl
//! ```

pub mod bootstrap;
pub mod provider_resolvers;

pub use bootstrap::{AppContext, init_app, init_app_with};
pub use provider_resolvers::CacheProviderResolver;
