//! Execution results and their cache encodings

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Captured outcome of a finished command
///
/// This is the value that crosses the cache boundary, so every field must
/// survive an [`ResultEncoding`] round trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Exit code of the child (negative signal number when killed on unix)
    pub exit_code: i32,
    /// Everything written to standard output
    pub stdout: String,
    /// Everything written to standard error
    pub stderr: String,
}

impl ExecutionResult {
    /// Create a new execution result
    pub fn new(exit_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Whether the command exited with code 0
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Blob format used to store results in the cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultEncoding {
    /// `{"exit_code":0,"stdout":"...","stderr":"..."}`
    #[default]
    Json,
    /// Three `key = value` lines
    Toml,
}

impl ResultEncoding {
    /// Serialize a result into a cache blob
    pub fn encode(self, result: &ExecutionResult) -> Result<String> {
        Ok(match self {
            Self::Json => serde_json::to_string(result)?,
            Self::Toml => toml::to_string(result)?,
        })
    }

    /// Parse a cache blob back into a result
    pub fn decode(self, blob: &str) -> Result<ExecutionResult> {
        Ok(match self {
            Self::Json => serde_json::from_str(blob)?,
            Self::Toml => toml::from_str(blob)?,
        })
    }
}
