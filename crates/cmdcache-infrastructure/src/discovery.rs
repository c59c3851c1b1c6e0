//! Cache endpoint discovery
//!
//! The executor must keep working when nobody can say where the cache
//! lives, so every lookup goes through [`resolve_or_default`].

use crate::config::CacheConfig;
use cmdcache_domain::error::{Error, Result};
use cmdcache_domain::ports::{CacheEndpoint, EndpointResolver};
use tracing::{debug, warn};

/// Reads the endpoint from the `[cache]` configuration section
///
/// Resolution fails when no port is configured.
#[derive(Debug, Clone)]
pub struct ConfiguredEndpointResolver {
    host: String,
    port: Option<u16>,
    db: i64,
}

impl ConfiguredEndpointResolver {
    /// Resolver over the given cache configuration
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
            db: config.db,
        }
    }
}

impl EndpointResolver for ConfiguredEndpointResolver {
    fn resolve(&self) -> Result<CacheEndpoint> {
        if self.host.is_empty() {
            return Err(Error::config("No cache host configured"));
        }
        let port = self
            .port
            .ok_or_else(|| Error::config("No cache port configured"))?;
        Ok(CacheEndpoint::new(self.host.clone(), port).with_db(self.db))
    }

    fn resolver_name(&self) -> &str {
        "configuration"
    }
}

/// Resolve the cache endpoint, falling back to `127.0.0.1:6379` on failure
pub fn resolve_or_default(resolver: &dyn EndpointResolver) -> CacheEndpoint {
    match resolver.resolve() {
        Ok(endpoint) => {
            debug!(resolver = resolver.resolver_name(), %endpoint, "Cache endpoint resolved");
            endpoint
        }
        Err(e) => {
            let endpoint = CacheEndpoint::default();
            warn!(
                resolver = resolver.resolver_name(),
                error = %e,
                %endpoint,
                "Cache endpoint discovery failed, using default"
            );
            endpoint
        }
    }
}
