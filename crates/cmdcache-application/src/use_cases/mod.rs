//! Use Cases

/// Memoized command execution
pub mod memoized_executor;

pub use memoized_executor::{ExecutorConfig, ExecutorStats, MemoizedExecutor};
