//! Provider Registry
//!
//! Providers register a factory into a linkme distributed slice at compile
//! time. Infrastructure resolves them by the name found in configuration.

/// Cache provider registry
pub mod cache;

pub use cache::{
    CACHE_PROVIDERS, CacheProviderConfig, CacheProviderEntry, list_cache_providers,
    resolve_cache_provider,
};
