//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | CacheProvider | Key-value store holding encoded results |
//! | ProcessRunner | Spawns a child and captures its output |

/// Cache provider port
pub mod cache;
/// Process runner port
pub mod process;

pub use cache::{CacheEntryConfig, CacheProvider, CacheStats};
pub use process::{ProcessRunner, ProcessSpec};
