//! Configuration loader
//!
//! Merges, later sources winning:
//! 1. `AppConfig::default()`
//! 2. A TOML file, either the explicit path or the first `cmdcache.toml`
//!    found in the working directory, `./cmdcache/`, the user config dir or
//!    `~/.cmdcache/`
//! 3. Environment variables such as `CMDCACHE_EXECUTOR__TTL_SECS`

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use cmdcache_application::ports::registry::list_cache_providers;
use cmdcache_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources and validate it
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file as TOML
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .with_context(|| format!("Failed to write config file {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Get the explicit configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_logging_config(config)?;
    validate_cache_config(config)?;
    validate_executor_config(config)?;
    Ok(())
}

fn validate_logging_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level).map(|_| ())
}

fn validate_cache_config(config: &AppConfig) -> Result<()> {
    let cache = &config.cache;
    if cache.port == Some(0) {
        return Err(Error::config("Cache port cannot be 0"));
    }
    if cache.enabled && cache.max_capacity == 0 {
        return Err(Error::config("Cache max_capacity cannot be 0 when cache is enabled"));
    }

    let provider = cache.effective_provider();
    let available = list_cache_providers();
    if !available.iter().any(|(name, _)| *name == provider) {
        let names: Vec<&str> = available.iter().map(|(name, _)| *name).collect();
        return Err(Error::config(format!(
            "Unknown cache provider '{provider}'. Available providers: [{}]",
            names.join(", ")
        )));
    }
    Ok(())
}

fn validate_executor_config(config: &AppConfig) -> Result<()> {
    let executor = &config.executor;
    if executor.ttl_secs == 0 {
        return Err(Error::config("Executor ttl_secs cannot be 0"));
    }
    if executor.allowed_exit_codes.is_empty() {
        return Err(Error::config(
            "Executor allowed_exit_codes cannot be empty; every result would be an error",
        ));
    }
    if executor.key_prefix.is_empty() {
        return Err(Error::config("Executor key_prefix cannot be empty"));
    }
    if executor.command_timeout_secs == Some(0) {
        return Err(Error::config("Executor command_timeout_secs cannot be 0"));
    }
    if executor.cache_timeout_ms == Some(0) {
        return Err(Error::config("Executor cache_timeout_ms cannot be 0"));
    }
    Ok(())
}
