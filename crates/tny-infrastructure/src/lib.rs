//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that wire the domain, the application
//! use cases and the providers together.
//!
//! ## Module Categories
//!
//! ### Configuration & DI
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration from defaults, TOML and `TNY__` env vars |
//! | [`di`] | Composition root and cache provider resolution |
//! | [`constants`] | Configuration defaults |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context helpers converting foreign errors into domain errors |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use di::{AppContext, init_app, init_app_with};
pub use error_ext::ErrorContext;
