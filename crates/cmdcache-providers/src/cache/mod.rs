//! Cache Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullCacheProvider`] | Disabled | Never stores, every lookup misses |
//! | [`MokaCacheProvider`] | Local | In-process cache with per-entry TTL |
//! | [`RedisCacheProvider`] | Distributed | Shared across every process on the host |
//!
//! ## Provider Selection Guide
//!
//! - **Shared deduplication**: `RedisCacheProvider`, the reference backend
//! - **Single process**: `MokaCacheProvider`
//! - **Caching off**: `NullCacheProvider`

#[cfg(feature = "cache-moka")]
pub mod moka;
pub mod null;
#[cfg(feature = "cache-redis")]
pub mod redis;

// Re-export for convenience
#[cfg(feature = "cache-moka")]
pub use moka::MokaCacheProvider;
pub use null::NullCacheProvider;
#[cfg(feature = "cache-redis")]
pub use redis::RedisCacheProvider;

// Re-export domain types used by cache providers
pub use cmdcache_domain::ports::{CacheEntryConfig, CacheStats};
