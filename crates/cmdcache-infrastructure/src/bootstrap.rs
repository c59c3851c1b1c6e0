//! Executor bootstrap
//!
//! Turns an [`AppConfig`] into a ready [`MemoizedExecutor`]: resolve the
//! cache endpoint, build the provider from the registry, attach the tokio
//! process runner.

use crate::config::{AppConfig, CacheConfig};
use crate::discovery::{ConfiguredEndpointResolver, resolve_or_default};
use cmdcache_application::MemoizedExecutor;
use cmdcache_application::ports::registry::{CacheProviderConfig, resolve_cache_provider};
use cmdcache_domain::error::{Error, Result};
use cmdcache_domain::ports::{CacheProvider, EndpointResolver, ProcessRunner};
use cmdcache_providers::process::TokioProcessRunner;
use std::sync::Arc;
use tracing::info;

/// Build an executor, reading the cache endpoint from configuration
pub fn build_executor(config: &AppConfig) -> Result<MemoizedExecutor> {
    let resolver = ConfiguredEndpointResolver::new(&config.cache);
    build_executor_with(config, &resolver)
}

/// Build an executor, asking `resolver` where the cache lives
pub fn build_executor_with(
    config: &AppConfig,
    resolver: &dyn EndpointResolver,
) -> Result<MemoizedExecutor> {
    let cache = create_cache_provider(&config.cache, resolver)?;
    let runner: Arc<dyn ProcessRunner> = Arc::new(TokioProcessRunner::new());
    let executor_config = config.executor.to_executor_config();

    info!(
        provider = cache.provider_name(),
        ttl_secs = config.executor.ttl_secs,
        single_flight = config.executor.single_flight,
        "Memoized executor ready"
    );

    Ok(MemoizedExecutor::new(cache, runner, executor_config))
}

/// Resolve the configured cache provider from the registry
///
/// Networked providers get the endpoint from `resolver`, falling back to
/// the default endpoint. Construction does no I/O.
pub fn create_cache_provider(
    config: &CacheConfig,
    resolver: &dyn EndpointResolver,
) -> Result<Arc<dyn CacheProvider>> {
    let provider = config.effective_provider();
    let mut registry_config =
        CacheProviderConfig::new(provider).with_max_capacity(config.max_capacity);

    if provider == "redis" {
        let endpoint = resolve_or_default(resolver);
        registry_config = registry_config.with_uri(endpoint.redis_url());
    }

    resolve_cache_provider(&registry_config).map_err(Error::config)
}
