//! Bootstrap Tests
//!
//! Construction does no I/O, so these run without a cache server.

use cmdcache_domain::error::{Error, Result};
use cmdcache_domain::ports::{CacheEndpoint, EndpointResolver};
use cmdcache_infrastructure::bootstrap::{build_executor, build_executor_with, create_cache_provider};
use cmdcache_infrastructure::config::{AppConfig, CacheConfig};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Default)]
struct CountingResolver {
    calls: AtomicUsize,
    fail: bool,
}

impl EndpointResolver for CountingResolver {
    fn resolve(&self) -> Result<CacheEndpoint> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(Error::infrastructure("registry down"))
        } else {
            Ok(CacheEndpoint::new("10.0.0.5", 6390))
        }
    }

    fn resolver_name(&self) -> &str {
        "counting"
    }
}

fn config_with_provider(provider: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.cache.provider = provider.to_string();
    config
}

#[test]
fn test_build_executor_with_moka() {
    let executor = build_executor(&config_with_provider("moka")).unwrap();
    assert_eq!(executor.cache_provider_name(), "moka");
}

#[test]
fn test_build_executor_defaults_to_redis() {
    let executor = build_executor(&AppConfig::default()).unwrap();
    assert_eq!(executor.cache_provider_name(), "redis");
}

#[test]
fn test_disabled_cache_uses_null_provider() {
    let mut config = config_with_provider("redis");
    config.cache.enabled = false;

    let executor = build_executor(&config).unwrap();

    assert_eq!(executor.cache_provider_name(), "null");
}

#[test]
fn test_executor_settings_are_applied() {
    let mut config = config_with_provider("null");
    config.executor.ttl_secs = 3;
    config.executor.allowed_exit_codes = vec![0];
    config.executor.single_flight = true;

    let executor = build_executor(&config).unwrap();

    assert_eq!(executor.config().ttl, Duration::from_secs(3));
    assert!(!executor.config().exit_policy.allows(45));
    assert!(executor.config().single_flight);
}

#[test]
fn test_resolver_consulted_for_redis() {
    let resolver = CountingResolver::default();

    let executor = build_executor_with(&config_with_provider("redis"), &resolver).unwrap();

    assert_eq!(executor.cache_provider_name(), "redis");
    assert_eq!(resolver.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_failing_resolver_still_builds() {
    let resolver = CountingResolver {
        fail: true,
        ..CountingResolver::default()
    };

    let executor = build_executor_with(&config_with_provider("redis"), &resolver).unwrap();

    assert_eq!(executor.cache_provider_name(), "redis");
    assert_eq!(resolver.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_resolver_not_consulted_for_local_providers() {
    let resolver = CountingResolver::default();

    for provider in ["moka", "null"] {
        build_executor_with(&config_with_provider(provider), &resolver).unwrap();
    }

    assert_eq!(resolver.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_unknown_provider_is_configuration_error() {
    let config = CacheConfig {
        provider: "memcached".to_string(),
        ..CacheConfig::default()
    };

    let err = create_cache_provider(&config, &CountingResolver::default()).unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("memcached"));
}
