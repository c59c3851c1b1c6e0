//! # cmdcache - Provider Implementations
//!
//! Concrete adapters for the ports declared in `cmdcache-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Cache | `CacheProvider` | Redis, Moka, Null |
//! | Process | `ProcessRunner` | Tokio |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! cmdcache-providers = { version = "0.1", default-features = false, features = ["cache-redis"] }
//! ```

// Re-export cmdcache-domain types commonly used with providers
pub use cmdcache_domain::error::{Error, Result};
pub use cmdcache_domain::ports::{CacheProvider, ProcessRunner};

/// Provider-specific constants
pub mod constants;

/// Cache provider implementations
///
/// Implements `CacheProvider` trait for caching backends.
pub mod cache;

/// Process runner implementations
///
/// Implements `ProcessRunner` trait for spawning commands.
pub mod process;
