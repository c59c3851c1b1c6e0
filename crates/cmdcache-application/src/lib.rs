//! # cmdcache - Application Layer
//!
//! Orchestrates the domain ports into the memoized executor.
//!
//! - [`use_cases::MemoizedExecutor`] - fingerprint, look up, run on miss, store
//! - [`ports::registry`] - compile-time registry of cache provider factories

/// Application-level ports (provider registry)
pub mod ports;
/// Use cases
pub mod use_cases;

pub use use_cases::{ExecutorConfig, ExecutorStats, MemoizedExecutor};
