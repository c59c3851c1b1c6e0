//! # cmdcache
//!
//! Runs external commands and memoizes their results for a short TTL,
//! keyed by a hash of the command tokens. Meant for expensive, read-only
//! inventory commands that several callers issue within seconds of each
//! other.
//!
//! ## Example
//!
//! ```ignore
//! use cmdcache::infrastructure::{AppConfig, build_executor};
//!
//! let executor = build_executor(&AppConfig::default())?;
//! let result = executor.execute(["storcli", "/c0", "show"]).await?;
//! println!("{}", result.stdout);
//! ```
//!
//! Exit codes outside the allow-list (default `0`, `45`, `46`) come back as
//! [`Error::Execution`] and are never cached. Cache trouble of any kind only
//! costs a re-execution.
//!
//! ## Architecture
//!
//! - `domain` - value objects, ports and errors
//! - `application` - the memoized executor and the provider registry
//! - `providers` - Redis/Moka/Null caches and the tokio process runner
//! - `infrastructure` - configuration, logging, discovery, bootstrap

// Force linkme registration of the built-in cache providers
extern crate cmdcache_providers;

use std::path::Path;

/// Domain layer - value objects, ports and errors
pub mod domain {
    pub use cmdcache_domain::*;
}

/// Application layer - memoized executor and provider registry
pub mod application {
    pub use cmdcache_application::*;
}

/// Provider implementations
pub mod providers {
    pub use cmdcache_providers::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
pub mod infrastructure {
    pub use cmdcache_infrastructure::*;
}

pub use application::{ExecutorConfig, ExecutorStats, MemoizedExecutor};
pub use domain::*;

/// Load configuration from the default sources and build an executor
///
/// Sources are `cmdcache.toml` (working dir or user config dir) and
/// `CMDCACHE_*` environment variables, on top of the defaults.
pub fn executor_from_env() -> Result<MemoizedExecutor> {
    let config = infrastructure::ConfigLoader::new().load()?;
    infrastructure::build_executor(&config)
}

/// Load configuration from `path` (plus environment overrides) and build an
/// executor
pub fn executor_from_file<P: AsRef<Path>>(path: P) -> Result<MemoizedExecutor> {
    let config = infrastructure::ConfigLoader::new()
        .with_config_path(path)
        .load()?;
    infrastructure::build_executor(&config)
}
