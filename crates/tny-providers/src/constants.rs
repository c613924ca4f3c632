//! Provider Constants
//!
//! Constants specific to provider implementations. Domain constants live in
//! `tny-domain`, configuration defaults in `tny-infrastructure`.

// ============================================================================
// CACHE PROVIDER CONSTANTS
// ============================================================================

/// Default maximum number of entries of the in-process cache
pub const CACHE_DEFAULT_MAX_ENTRIES: u64 = 10_000;

/// Redis URI used when none is configured
pub const REDIS_DEFAULT_URI: &str = "redis://localhost:6379";

// ============================================================================
// EVENT BUS CONSTANTS
// ============================================================================

/// Default broadcast channel capacity
pub const EVENT_BUS_DEFAULT_CAPACITY: usize = 1024;
