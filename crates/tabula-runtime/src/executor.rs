//! Helper executor backed by real OS processes.
//!
//! Pipeline: spawn with piped stdout/stderr → buffer both concurrently →
//! wait for exit. No timeout, no output cap, no kill on drop: once
//! spawned, a helper runs to completion.

use std::process::Stdio;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::RuntimeError;
use crate::invocation::HelperInvocation;
use crate::types::{HelperExecutor, HelperOutput};

/// Launches each invocation as a child process via `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HelperExecutor for ProcessExecutor {
    /// # Errors
    ///
    /// Returns `RuntimeError::Launch` if the process cannot be spawned or
    /// its pipes cannot be read.
    #[tracing::instrument(skip_all, fields(
        tool = %invocation.tool_name,
        script = %invocation.script_path.display(),
    ))]
    async fn execute(&self, invocation: &HelperInvocation) -> Result<HelperOutput, RuntimeError> {
        let start = Instant::now();

        // stdin is the MCP channel; the child must never read from it.
        let output = Command::new(&invocation.executable)
            .args(invocation.argv())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| RuntimeError::Launch {
                script: invocation.script_path.display().to_string(),
                source,
            })?;

        let duration_ms = millis(start.elapsed());
        let exit_code = output.status.code();

        debug!(
            ?exit_code,
            stdout_len = output.stdout.len(),
            stderr_len = output.stderr.len(),
            duration_ms,
            "helper exited"
        );

        Ok(HelperOutput {
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            duration_ms,
        })
    }
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
