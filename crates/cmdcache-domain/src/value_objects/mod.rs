//! Value Objects
//!
//! Immutable types that flow through the executor. Identity is structural:
//! two commands with the same tokens are the same command.

/// Command token sequence
pub mod command;
/// Captured outcome of a command and its cache encodings
pub mod execution;
/// Exit code allow-list
pub mod exit_policy;
/// Content-addressed cache keys
pub mod fingerprint;

pub use command::Command;
pub use execution::{ExecutionResult, ResultEncoding};
pub use exit_policy::ExitCodePolicy;
pub use fingerprint::{Fingerprint, FingerprintScheme, fingerprint};
