//! Domain Port Interfaces
//!
//! Boundary contracts between the executor and the outside world.
//!
//! ## Organization
//!
//! - **providers/** - Cache backends and process execution
//! - **infrastructure/** - Cache endpoint discovery

/// Infrastructure service ports
pub mod infrastructure;
/// External service provider ports
pub mod providers;

// Re-export commonly used port traits for convenience
pub use infrastructure::{CacheEndpoint, EndpointResolver};
pub use providers::{CacheEntryConfig, CacheProvider, CacheStats, ProcessRunner, ProcessSpec};
