//! Executor configuration types

use cmdcache_application::ExecutorConfig;
use cmdcache_domain::constants::{
    CACHE_KEY_PREFIX, DEFAULT_ALLOWED_EXIT_CODES, DEFAULT_INHERITED_ENV, DEFAULT_RESULT_TTL_SECS,
};
use cmdcache_domain::value_objects::{ExitCodePolicy, FingerprintScheme, ResultEncoding};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Memoization settings as they appear in the configuration file
///
/// Durations are plain integers here; [`ExecutorSettings::to_executor_config`]
/// turns them into the typed [`ExecutorConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutorSettings {
    /// Lifetime of a cached result in seconds
    pub ttl_secs: u64,

    /// Exit codes whose results are cached and returned
    pub allowed_exit_codes: Vec<i32>,

    /// Prefix of every cache key
    pub key_prefix: String,

    /// How command tokens are fed into the hash
    pub fingerprint_scheme: FingerprintScheme,

    /// Serialization of cached results
    pub encoding: ResultEncoding,

    /// Variables copied from the parent environment into the child
    pub inherited_env: Vec<String>,

    /// Kill the child after this many seconds
    pub command_timeout_secs: Option<u64>,

    /// Give up on a cache round trip after this many milliseconds
    pub cache_timeout_ms: Option<u64>,

    /// Run at most one child per fingerprint at a time
    pub single_flight: bool,
}

impl Default for ExecutorSettings {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_RESULT_TTL_SECS,
            allowed_exit_codes: DEFAULT_ALLOWED_EXIT_CODES.to_vec(),
            key_prefix: CACHE_KEY_PREFIX.to_string(),
            fingerprint_scheme: FingerprintScheme::default(),
            encoding: ResultEncoding::default(),
            inherited_env: DEFAULT_INHERITED_ENV.iter().map(ToString::to_string).collect(),
            command_timeout_secs: None,
            cache_timeout_ms: None,
            single_flight: false,
        }
    }
}

impl ExecutorSettings {
    /// Build the executor configuration these settings describe
    pub fn to_executor_config(&self) -> ExecutorConfig {
        ExecutorConfig::default()
            .with_ttl(Duration::from_secs(self.ttl_secs))
            .with_exit_policy(ExitCodePolicy::new(self.allowed_exit_codes.iter().copied()))
            .with_key_prefix(self.key_prefix.clone())
            .with_fingerprint_scheme(self.fingerprint_scheme)
            .with_encoding(self.encoding)
            .with_inherited_env(self.inherited_env.iter().cloned())
            .with_command_timeout(self.command_timeout_secs.map(Duration::from_secs))
            .with_cache_timeout(self.cache_timeout_ms.map(Duration::from_millis))
            .with_single_flight(self.single_flight)
    }
}
