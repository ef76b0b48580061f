//! Shared types for helper execution and the executor trait.

use async_trait::async_trait;

use crate::error::RuntimeError;
use crate::invocation::HelperInvocation;

/// Everything a finished helper process left behind.
///
/// Buffers belong to one call and are never shared between calls.
#[derive(Debug, Clone, Default)]
pub struct HelperOutput {
    /// Exit code, `None` if the process was killed by a signal.
    pub exit_code: Option<i32>,
    /// Complete standard output.
    pub stdout: String,
    /// Complete standard error.
    pub stderr: String,
    /// Wall-clock time from spawn to exit.
    pub duration_ms: u64,
}

impl HelperOutput {
    /// Whether the process exited with status 0.
    pub fn exited_cleanly(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs a prepared helper invocation to completion.
///
/// Implementations must buffer stdout and stderr fully and only return
/// once the process has terminated.
#[async_trait]
pub trait HelperExecutor: Send + Sync {
    /// Launches the helper and waits for it to exit.
    async fn execute(&self, invocation: &HelperInvocation) -> Result<HelperOutput, RuntimeError>;
}
