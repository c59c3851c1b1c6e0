//! Configuration Type Tests

use cmdcache_domain::value_objects::{FingerprintScheme, ResultEncoding};
use cmdcache_infrastructure::config::{CacheConfig, ExecutorSettings};
use std::time::Duration;

#[test]
fn test_default_settings_match_default_executor_config() {
    let config = ExecutorSettings::default().to_executor_config();

    assert_eq!(config.ttl, Duration::from_secs(30));
    assert!(config.exit_policy.allows(0));
    assert!(config.exit_policy.allows(45));
    assert!(config.exit_policy.allows(46));
    assert!(!config.exit_policy.allows(1));
    assert_eq!(config.key_prefix, "cmd_");
    assert_eq!(config.fingerprint_scheme, FingerprintScheme::Concatenated);
    assert_eq!(config.encoding, ResultEncoding::Json);
    assert_eq!(config.inherited_env, vec!["PATH".to_string()]);
    assert_eq!(config.command_timeout, None);
    assert_eq!(config.cache_timeout, None);
    assert!(!config.single_flight);
}

#[test]
fn test_settings_conversion_carries_every_field() {
    let settings = ExecutorSettings {
        ttl_secs: 5,
        allowed_exit_codes: vec![0, 2],
        key_prefix: "ctl_".to_string(),
        fingerprint_scheme: FingerprintScheme::LengthPrefixed,
        encoding: ResultEncoding::Toml,
        inherited_env: vec!["PATH".to_string(), "LANG".to_string()],
        command_timeout_secs: Some(10),
        cache_timeout_ms: Some(250),
        single_flight: true,
    };

    let config = settings.to_executor_config();

    assert_eq!(config.ttl, Duration::from_secs(5));
    assert!(config.exit_policy.allows(2));
    assert!(!config.exit_policy.allows(45));
    assert_eq!(config.key_prefix, "ctl_");
    assert_eq!(config.fingerprint_scheme, FingerprintScheme::LengthPrefixed);
    assert_eq!(config.encoding, ResultEncoding::Toml);
    assert_eq!(config.inherited_env, vec!["PATH".to_string(), "LANG".to_string()]);
    assert_eq!(config.command_timeout, Some(Duration::from_secs(10)));
    assert_eq!(config.cache_timeout, Some(Duration::from_millis(250)));
    assert!(config.single_flight);
}

#[test]
fn test_effective_provider() {
    let mut cache = CacheConfig::default();
    assert_eq!(cache.effective_provider(), "redis");

    cache.provider = "moka".to_string();
    assert_eq!(cache.effective_provider(), "moka");

    cache.enabled = false;
    assert_eq!(cache.effective_provider(), "null");
}
