//! # cmdcache - Domain Layer
//!
//! Core types and contracts for the memoized command executor.
//!
//! ## Organization
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`value_objects`] | `Command`, `Fingerprint`, `ExecutionResult`, `ExitCodePolicy` |
//! | [`ports`] | `CacheProvider`, `ProcessRunner`, `EndpointResolver` |
//! | [`error`] | Domain error type and `ExecutionError` |
//! | [`constants`] | Defaults shared by every layer |
//!
//! The domain layer has no I/O of its own. Cache backends and the process
//! runner live in `cmdcache-providers`; wiring lives in
//! `cmdcache-infrastructure`.

/// Domain-wide constants
pub mod constants;
/// Error handling types
pub mod error;
/// Boundary contracts implemented by outer layers
pub mod ports;
/// Immutable value types
pub mod value_objects;

pub use error::{Error, ExecutionError, Result};
pub use value_objects::{
    Command, ExecutionResult, ExitCodePolicy, Fingerprint, FingerprintScheme, ResultEncoding,
    fingerprint,
};
