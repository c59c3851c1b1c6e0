//! Process Runner Implementations
//!
//! | Runner | Description |
//! |--------|-------------|
//! | [`TokioProcessRunner`] | Spawns the child with `tokio::process` |

pub mod tokio_runner;

pub use tokio_runner::TokioProcessRunner;
