//! Process Runner Port
//!
//! Spawns a command with an explicit environment and captures its outcome.
//! Substituting this port is how tests observe whether the executor ran a
//! command at all.

use crate::constants::DEFAULT_INHERITED_ENV;
use crate::error::Result;
use crate::value_objects::{Command, ExecutionResult};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::time::Duration;

/// Everything a runner needs to start one child process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSpec {
    /// Command to run
    pub command: Command,
    /// Complete environment of the child; nothing else is inherited
    pub env: BTreeMap<String, String>,
    /// Kill the child after this long
    pub timeout: Option<Duration>,
}

impl ProcessSpec {
    /// Spec with an empty environment and no timeout
    pub fn new(command: Command) -> Self {
        Self {
            command,
            env: BTreeMap::new(),
            timeout: None,
        }
    }

    /// Copy the named variables from the current process environment.
    /// Variables that are unset or not valid unicode are skipped.
    pub fn inherit_env<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            if let Ok(value) = std::env::var(name) {
                self.env.insert(name.to_string(), value);
            }
        }
        self
    }

    /// Inherit only `PATH`
    pub fn with_default_env(self) -> Self {
        self.inherit_env(DEFAULT_INHERITED_ENV.iter().copied())
    }

    /// Set a single environment variable
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Process Runner Port
///
/// Implementations must capture stdout and stderr in full, keep stdin
/// closed and report the exit code verbatim. Classifying the code is the
/// executor's job, not the runner's.
#[async_trait]
pub trait ProcessRunner: Send + Sync + std::fmt::Debug {
    /// Run the child to completion
    ///
    /// # Errors
    ///
    /// [`crate::Error::Spawn`] if the child cannot start,
    /// [`crate::Error::Timeout`] if `spec.timeout` elapses first.
    async fn run(&self, spec: &ProcessSpec) -> Result<ExecutionResult>;

    /// Name of the runner implementation
    fn runner_name(&self) -> &str;
}
