//! Cache configuration types

use crate::constants::{DEFAULT_CACHE_MAX_CAPACITY, DEFAULT_CACHE_PROVIDER};
use cmdcache_domain::constants::{DEFAULT_CACHE_DB, DEFAULT_CACHE_HOST};
use serde::{Deserialize, Serialize};

/// Cache configuration
///
/// `provider` names an entry in the cache provider registry. `host` and
/// `port` only matter for networked providers; leaving `port` unset makes
/// endpoint resolution fall back to the default endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// When false the null provider is used and every call runs the command
    pub enabled: bool,

    /// Registered provider name (`redis`, `moka`, `null`)
    pub provider: String,

    /// Cache server host
    pub host: String,

    /// Cache server port
    pub port: Option<u16>,

    /// Logical database index
    pub db: i64,

    /// Entry bound for in-process providers
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: DEFAULT_CACHE_PROVIDER.to_string(),
            host: DEFAULT_CACHE_HOST.to_string(),
            port: None,
            db: DEFAULT_CACHE_DB,
            max_capacity: DEFAULT_CACHE_MAX_CAPACITY,
        }
    }
}

impl CacheConfig {
    /// Provider that will actually be resolved, taking `enabled` into account
    pub fn effective_provider(&self) -> &str {
        if self.enabled { &self.provider } else { "null" }
    }
}
