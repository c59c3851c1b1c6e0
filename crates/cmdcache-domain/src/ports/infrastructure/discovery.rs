//! Cache Endpoint Discovery Port
//!
//! Locating the cache service is somebody else's job (a service registry,
//! a deployment manifest, environment variables). This port is the seam
//! where that collaborator plugs in.

use crate::constants::{DEFAULT_CACHE_DB, DEFAULT_CACHE_HOST, DEFAULT_CACHE_PORT};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Network location of the cache service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEndpoint {
    /// Hostname or IP address
    pub host: String,
    /// TCP port
    pub port: u16,
    /// Logical database index
    pub db: i64,
}

impl CacheEndpoint {
    /// Endpoint on database 0
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            db: DEFAULT_CACHE_DB,
        }
    }

    /// Select a different logical database
    pub fn with_db(mut self, db: i64) -> Self {
        self.db = db;
        self
    }

    /// Connection URL understood by the Redis client
    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}/{}", self.host, self.port, self.db)
    }
}

impl Default for CacheEndpoint {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_HOST, DEFAULT_CACHE_PORT)
    }
}

impl fmt::Display for CacheEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Resolves where the cache service lives
pub trait EndpointResolver: Send + Sync {
    /// Look up the endpoint
    ///
    /// Callers fall back to [`CacheEndpoint::default`] on error.
    fn resolve(&self) -> Result<CacheEndpoint>;

    /// Name used in log messages
    fn resolver_name(&self) -> &str;
}
