//! Application Ports
//!
//! Re-exports the domain provider ports next to the registry that creates
//! them from configuration.

/// Provider registry
pub mod registry;

pub use cmdcache_domain::ports::providers;
