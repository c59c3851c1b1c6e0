//! Infrastructure constants

/// Configuration file looked up in the working directory and config dirs
pub const DEFAULT_CONFIG_FILENAME: &str = "cmdcache.toml";

/// Directory name under the user config dir
pub const DEFAULT_CONFIG_DIR: &str = "cmdcache";

/// Prefix for configuration environment variables
pub const CONFIG_ENV_PREFIX: &str = "CMDCACHE";

/// Separator between nesting levels in environment variable names
///
/// `CMDCACHE_EXECUTOR__TTL_SECS` maps to `executor.ttl_secs`.
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Environment variable holding an `EnvFilter` directive that overrides the
/// configured log level
pub const LOG_FILTER_ENV: &str = "CMDCACHE_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File stem used for rolling log files when none can be derived
pub const DEFAULT_LOG_FILE_STEM: &str = "cmdcache";

/// Cache provider used when none is configured
pub const DEFAULT_CACHE_PROVIDER: &str = "redis";

/// Entry bound for in-process cache providers
pub const DEFAULT_CACHE_MAX_CAPACITY: u64 = 10_000;
