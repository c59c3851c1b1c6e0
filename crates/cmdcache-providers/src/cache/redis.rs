//! Redis distributed cache provider
//!
//! The reference backend: every process on the host shares one Redis
//! database, so a command run by one caller is reused by the others for the
//! rest of the TTL window.
//!
//! ## Connection handling
//!
//! Constructing the provider does no I/O. The first operation opens a
//! multiplexed connection which is then reused by every later call. When an
//! operation fails because the connection dropped, the handle is discarded
//! and the next call reconnects.
//!
//! ## Example
//!
//! ```ignore
//! use cmdcache_providers::cache::RedisCacheProvider;
//!
//! let provider = RedisCacheProvider::new("redis://127.0.0.1:6379/0")?;
//! // Or with host/port
//! let provider = RedisCacheProvider::with_host_port("127.0.0.1", 6379)?;
//! ```

use crate::constants::{REDIS_DEFAULT_URL, REDIS_MIN_TTL_SECS};
use async_trait::async_trait;
use cmdcache_domain::error::{Error, Result};
use cmdcache_domain::ports::{CacheEntryConfig, CacheProvider, CacheStats};
use redis::{AsyncCommands, Client, RedisError, aio::MultiplexedConnection};
use std::sync::{Arc, RwLock};
use tokio::sync::Mutex;
use tracing::debug;

/// Redis cache provider
#[derive(Clone)]
pub struct RedisCacheProvider {
    client: Client,
    server: String,
    connection: Arc<Mutex<Option<MultiplexedConnection>>>,
    stats: Arc<RwLock<CacheStats>>,
}

impl RedisCacheProvider {
    /// Create a new Redis cache provider with connection string
    ///
    /// # Arguments
    ///
    /// * `connection_string` - Redis connection URL (e.g., "redis://127.0.0.1:6379/0")
    pub fn new(connection_string: &str) -> Result<Self> {
        let client = Client::open(connection_string)
            .map_err(|e| Error::infrastructure_with_source("Failed to create Redis client", e))?;

        Ok(Self {
            client,
            server: redact_credentials(connection_string),
            connection: Arc::new(Mutex::new(None)),
            stats: Arc::new(RwLock::new(CacheStats::new())),
        })
    }

    /// Create a new Redis cache provider with host and port
    pub fn with_host_port(host: &str, port: u16) -> Result<Self> {
        Self::new(&format!("redis://{host}:{port}/0"))
    }

    /// Get the shared connection, opening it on first use
    async fn get_connection(&self) -> Result<MultiplexedConnection> {
        let mut slot = self.connection.lock().await;
        if let Some(conn) = slot.as_ref() {
            return Ok(conn.clone());
        }

        let conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| Error::infrastructure_with_source("Failed to get Redis connection", e))?;
        debug!(server = %self.server_address(), "Redis connection established");
        *slot = Some(conn.clone());
        Ok(conn)
    }

    /// Convert a command failure, dropping the cached handle if the
    /// connection itself is gone
    async fn command_failed(&self, operation: &str, e: RedisError) -> Error {
        if e.is_io_error() || e.is_connection_dropped() || e.is_connection_refusal() {
            self.connection.lock().await.take();
        }
        Error::infrastructure_with_source(format!("Redis {operation} failed"), e)
    }

    /// Record a cache lookup outcome
    fn record_lookup(&self, hit: bool) {
        if let Ok(mut stats) = self.stats.write() {
            if hit {
                stats.hits += 1;
            } else {
                stats.misses += 1;
            }
            stats.hit_rate = stats.calculate_hit_rate();
        }
    }

    /// Get the Redis server address description
    pub fn server_address(&self) -> &str {
        &self.server
    }
}

/// Strip `user:password@` from a connection URL so it can be logged
fn redact_credentials(url: &str) -> String {
    match url.split_once("://") {
        Some((scheme, rest)) => {
            let host = rest.rsplit_once('@').map_or(rest, |(_, host)| host);
            format!("{scheme}://{host}")
        }
        None => url.to_string(),
    }
}

#[async_trait]
impl CacheProvider for RedisCacheProvider {
    async fn get_json(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.get_connection().await?;

        match conn.get::<_, Option<String>>(key).await {
            Ok(value) => {
                self.record_lookup(value.is_some());
                Ok(value)
            }
            Err(e) => Err(self.command_failed("GET", e).await),
        }
    }

    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()> {
        let mut conn = self.get_connection().await?;

        let ttl_seconds = config.effective_ttl().as_secs().max(REDIS_MIN_TTL_SECS);
        let result: redis::RedisResult<()> = conn.set_ex(key, value, ttl_seconds).await;

        match result {
            Ok(()) => Ok(()),
            Err(e) => Err(self.command_failed("SETEX", e).await),
        }
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let mut conn = self.get_connection().await?;

        let exists: redis::RedisResult<i32> = conn.exists(key).await;
        match exists {
            Ok(count) => Ok(count > 0),
            Err(e) => Err(self.command_failed("EXISTS", e).await),
        }
    }

    async fn stats(&self) -> Result<CacheStats> {
        let entries = self.size().await?;

        let mut internal_stats = self
            .stats
            .read()
            .map_err(|_| Error::infrastructure("Failed to read cache stats"))?
            .clone();

        internal_stats.entries = entries as u64;

        Ok(internal_stats)
    }

    async fn size(&self) -> Result<usize> {
        let mut conn = self.get_connection().await?;

        let dbsize: redis::RedisResult<usize> = redis::cmd("DBSIZE").query_async(&mut conn).await;
        match dbsize {
            Ok(size) => Ok(size),
            Err(e) => Err(self.command_failed("DBSIZE", e).await),
        }
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheProvider")
            .field("server", &self.server_address())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use cmdcache_application::ports::registry::{CACHE_PROVIDERS, CacheProviderConfig, CacheProviderEntry};

/// Factory function for creating Redis cache provider instances.
fn redis_cache_factory(
    config: &CacheProviderConfig,
) -> std::result::Result<Arc<dyn CacheProvider>, String> {
    let uri = config.uri.as_deref().unwrap_or(REDIS_DEFAULT_URL);

    let provider =
        RedisCacheProvider::new(uri).map_err(|e| format!("Failed to create Redis provider: {e}"))?;

    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(CACHE_PROVIDERS)]
static REDIS_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: "redis",
    description: "Redis cache shared by every process on the host",
    factory: redis_cache_factory,
};
