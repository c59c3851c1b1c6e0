//! Error handling types

use std::time::Duration;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// A command ran to completion but exited with a code outside the allow-list
///
/// Carries everything the caller needs to log or react to the failure.
/// Rendered as `cmd: '<command>', errno: <code>, stdout: '<out>', stderr: '<err>'`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cmd: '{joined_command}', errno: {exit_code}, stdout: '{stdout}', stderr: '{stderr}'")]
pub struct ExecutionError {
    /// Command tokens joined by a single space
    pub joined_command: String,
    /// Exit code reported by the child
    pub exit_code: i32,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

/// Main error type for cmdcache
#[derive(Error, Debug)]
pub enum Error {
    /// Command exited with a code outside the allow-list
    #[error(transparent)]
    Execution(#[from] ExecutionError),

    /// Child process could not be started
    #[error("Failed to spawn '{command}': {source}")]
    Spawn {
        /// Joined command line
        command: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Child process exceeded its time budget and was killed
    #[error("Command '{command}' timed out after {timeout:?}")]
    Timeout {
        /// Joined command line
        command: String,
        /// The budget that was exceeded
        timeout: Duration,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// TOML serialization error
    #[error("TOML serialization error: {source}")]
    TomlSer {
        /// The underlying TOML error
        #[from]
        source: toml::ser::Error,
    },

    /// TOML parsing error
    #[error("TOML parsing error: {source}")]
    TomlDe {
        /// The underlying TOML error
        #[from]
        source: toml::de::Error,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Cache operation error
    #[error("Cache error: {message}")]
    Cache {
        /// Description of the cache error
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a cache error
    pub fn cache<S: Into<String>>(message: S) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Classification helpers
impl Error {
    /// The execution failure, if this error is one
    pub fn as_execution(&self) -> Option<&ExecutionError> {
        match self {
            Self::Execution(err) => Some(err),
            _ => None,
        }
    }

    /// Whether the error came from running the command rather than from
    /// the cache layer or configuration
    pub fn is_command_failure(&self) -> bool {
        matches!(
            self,
            Self::Execution(_) | Self::Spawn { .. } | Self::Timeout { .. }
        )
    }
}
