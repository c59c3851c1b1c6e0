//! Infrastructure Ports

/// Cache endpoint discovery port
pub mod discovery;

pub use discovery::{CacheEndpoint, EndpointResolver};
