//! Tokio process runner
//!
//! Spawns the command with a cleared environment, closed stdin and piped
//! stdout/stderr, then waits for it to exit. Output is read to the end and
//! decoded as UTF-8, replacing invalid sequences.

use async_trait::async_trait;
use cmdcache_domain::constants::UNKNOWN_EXIT_CODE;
use cmdcache_domain::error::{Error, Result};
use cmdcache_domain::ports::{ProcessRunner, ProcessSpec};
use cmdcache_domain::value_objects::ExecutionResult;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::{debug, warn};

/// Runs commands as tokio child processes
#[derive(Debug, Clone, Default)]
pub struct TokioProcessRunner;

impl TokioProcessRunner {
    /// Create a new runner
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, spec: &ProcessSpec) -> Result<ExecutionResult> {
        let command = &spec.command;

        let child = Command::new(command.program())
            .args(command.args())
            .env_clear()
            .envs(&spec.env)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| Error::Spawn {
                command: command.joined(),
                source,
            })?;

        // Dropping the wait future on timeout drops the child, which kills it
        let output = match spec.timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait_with_output()).await {
                Ok(output) => output?,
                Err(_) => {
                    warn!(command = %command, timeout = ?limit, "Command timed out, killing child");
                    return Err(Error::Timeout {
                        command: command.joined(),
                        timeout: limit,
                    });
                }
            },
            None => child.wait_with_output().await?,
        };

        let exit_code = exit_code_of(output.status);
        debug!(command = %command, exit_code, "Command finished");

        Ok(ExecutionResult {
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn runner_name(&self) -> &str {
        "tokio"
    }
}

/// Exit code, or the negated signal number for a child killed by a signal
fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }

    UNKNOWN_EXIT_CODE
}
