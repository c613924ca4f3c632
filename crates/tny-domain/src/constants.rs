//! Domain layer constants
//!
//! Limits and key formats that are part of the domain rules. Infrastructure
//! defaults (config file names, cache sizes) live in
//! `tny_infrastructure::constants`.

use uuid::Uuid;

// ============================================================================
// TENANT CONSTANTS
// ============================================================================

/// Maximum length of a tenant name
pub const TENANT_NAME_MAX_LENGTH: usize = 64;

/// Prefix of every tenant configuration cache key
pub const TENANT_CONFIGURATION_CACHE_KEY_PREFIX: &str = "tenant-config:";

/// Name of the default connection string of a tenant
pub const DEFAULT_CONNECTION_STRING_NAME: &str = "Default";

// ============================================================================
// PERMISSION CONSTANTS
// ============================================================================

/// Maximum length of a permission or permission group name
pub const PERMISSION_NAME_MAX_LENGTH: usize = 128;

/// Separator used when flattening permission providers into a record
pub const PERMISSION_PROVIDERS_SEPARATOR: char = ',';

// ============================================================================
// RECORD CONSTANTS
// ============================================================================

/// Namespace for deterministic (UUID v5) record identifiers
pub const RECORD_ID_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2a3e_8d4b_4c5f_9a7e_1b2c_3d4e_5f60);

/// Display name prefix marking a fixed (non-localized) string
pub const FIXED_STRING_PREFIX: &str = "F:";

/// Display name prefix marking a localized string reference
pub const LOCALIZED_STRING_PREFIX: &str = "L:";
