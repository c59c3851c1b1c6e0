//! Domain layer constants
//!
//! Defaults that describe the reference behavior of the memoized executor.
//! Infrastructure-specific constants are defined in `cmdcache_infrastructure::constants`.

// ============================================================================
// FINGERPRINT CONSTANTS
// ============================================================================

/// Namespace tag prepended to every fingerprint
pub const CACHE_KEY_PREFIX: &str = "cmd_";

// ============================================================================
// CACHE ENTRY CONSTANTS
// ============================================================================

/// Lifetime of a memoized result in seconds
pub const DEFAULT_RESULT_TTL_SECS: u64 = 30;

// ============================================================================
// EXIT CODE CONSTANTS
// ============================================================================

/// Exit codes treated as cacheable, non-error outcomes.
///
/// `45` and `46` are "no new data" / "no change" signals emitted by the
/// storage controller tools this executor usually wraps.
pub const DEFAULT_ALLOWED_EXIT_CODES: &[i32] = &[0, 45, 46];

/// Exit code reported when the child exposes neither a code nor a signal
pub const UNKNOWN_EXIT_CODE: i32 = -1;

// ============================================================================
// PROCESS ENVIRONMENT CONSTANTS
// ============================================================================

/// Environment variables the child inherits from the caller
pub const DEFAULT_INHERITED_ENV: &[&str] = &["PATH"];

// ============================================================================
// CACHE ENDPOINT CONSTANTS
// ============================================================================

/// Cache host used when endpoint discovery fails
pub const DEFAULT_CACHE_HOST: &str = "127.0.0.1";

/// Cache port used when endpoint discovery fails
pub const DEFAULT_CACHE_PORT: u16 = 6379;

/// Logical database index on the cache server
pub const DEFAULT_CACHE_DB: i64 = 0;
