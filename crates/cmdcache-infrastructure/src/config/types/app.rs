//! Main application configuration

use super::{CacheConfig, ExecutorSettings, LoggingConfig};
use serde::{Deserialize, Serialize};

/// Root configuration
///
/// Every section falls back to its defaults, so an empty TOML file is a
/// valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Cache backend selection and location
    pub cache: CacheConfig,
    /// Memoization behaviour
    pub executor: ExecutorSettings,
}
