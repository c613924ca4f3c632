//! Infrastructure layer constants
//!
//! Domain constants live in `tny_domain::constants`, provider defaults in
//! `tny_providers::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "tenantry.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "tenantry";

/// Environment variable prefix for configuration (`TNY__SECTION__KEY`)
pub const CONFIG_ENV_PREFIX: &str = "TNY";

/// Separator between prefix, sections and keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "TNY_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File name stem of rolled log files when the path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "tenantry";

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Cache provider used when none is configured
pub const CACHE_DEFAULT_PROVIDER: &str = "moka";

/// Provider used when caching is disabled
pub const CACHE_DISABLED_PROVIDER: &str = "null";

// ============================================================================
// TENANT MANAGEMENT CONSTANTS
// ============================================================================

/// Upper bound accepted for the configured maximum tenant name length
pub const TENANT_NAME_LENGTH_LIMIT: usize = 256;
