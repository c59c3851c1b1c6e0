//! Provider Constants
//!
//! Constants specific to provider implementations. These are separated from
//! domain constants (which live in cmdcache-domain) and infrastructure constants.

// ============================================================================
// CACHE PROVIDER CONSTANTS
// ============================================================================

/// Default entry capacity of the in-process cache
pub const MOKA_DEFAULT_MAX_CAPACITY: u64 = 10_000;

/// Redis URL used when the registry config carries none
pub const REDIS_DEFAULT_URL: &str = "redis://127.0.0.1:6379/0";

/// Smallest TTL Redis accepts through `SETEX`
pub const REDIS_MIN_TTL_SECS: u64 = 1;
