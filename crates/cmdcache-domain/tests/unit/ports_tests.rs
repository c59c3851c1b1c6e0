//! Unit tests for port value types

use cmdcache_domain::Command;
use cmdcache_domain::ports::{CacheEndpoint, CacheEntryConfig, CacheStats, ProcessSpec};
use std::time::Duration;

#[test]
fn test_cache_entry_config_defaults_to_thirty_seconds() {
    let config = CacheEntryConfig::default();
    assert_eq!(config.effective_ttl(), Duration::from_secs(30));
}

#[test]
fn test_cache_entry_config_ttl_override() {
    let config = CacheEntryConfig::new().with_ttl_secs(5);
    assert_eq!(config.effective_ttl(), Duration::from_secs(5));

    let unset = CacheEntryConfig { ttl: None };
    assert_eq!(unset.effective_ttl(), Duration::from_secs(30));
}

#[test]
fn test_cache_stats_hit_rate() {
    let stats = CacheStats {
        hits: 3,
        misses: 1,
        ..CacheStats::new()
    };
    assert!((stats.calculate_hit_rate() - 0.75).abs() < f64::EPSILON);
    assert!(CacheStats::new().calculate_hit_rate().abs() < f64::EPSILON);
}

#[test]
fn test_cache_endpoint_default_and_url() {
    let endpoint = CacheEndpoint::default();
    assert_eq!(endpoint.host, "127.0.0.1");
    assert_eq!(endpoint.port, 6379);
    assert_eq!(endpoint.redis_url(), "redis://127.0.0.1:6379/0");
    assert_eq!(endpoint.to_string(), "127.0.0.1:6379");

    let custom = CacheEndpoint::new("cache.local", 7000).with_db(2);
    assert_eq!(custom.redis_url(), "redis://cache.local:7000/2");
}

#[test]
fn test_process_spec_inherits_only_named_variables() {
    let command = Command::new(["env"]).unwrap();
    let spec = ProcessSpec::new(command)
        .inherit_env(["PATH", "CMDCACHE_SURELY_UNSET_VARIABLE"])
        .with_env("LC_ALL", "C")
        .with_timeout(Some(Duration::from_secs(1)));

    if std::env::var("PATH").is_ok() {
        assert!(spec.env.contains_key("PATH"));
    }
    assert!(!spec.env.contains_key("CMDCACHE_SURELY_UNSET_VARIABLE"));
    assert_eq!(spec.env.get("LC_ALL").map(String::as_str), Some("C"));
    assert_eq!(spec.env.len(), usize::from(std::env::var("PATH").is_ok()) + 1);
    assert_eq!(spec.timeout, Some(Duration::from_secs(1)));
}
