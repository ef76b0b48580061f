//! Top-level call pipeline: route → launch → interpret.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use tabula_types::{HelperKind, ResultEnvelope, ToolCatalog, UnknownToolPolicy};

use crate::error::RuntimeError;
use crate::invocation::HelperInvocation;
use crate::outcome::interpret_output;
use crate::paths::HelperPaths;
use crate::types::HelperExecutor;

/// Process-scoped dispatch context.
///
/// Holds the immutable catalog, the helper locations and the executor.
/// Built once at startup and shared read-only between concurrent calls;
/// each call owns its own invocation and output buffers.
pub struct HelperDispatcher {
    catalog: Arc<ToolCatalog>,
    paths: HelperPaths,
    executor: Arc<dyn HelperExecutor>,
    unknown_tools: UnknownToolPolicy,
}

impl HelperDispatcher {
    /// Creates a dispatcher that rejects tools outside the catalog.
    pub fn new(
        catalog: Arc<ToolCatalog>,
        paths: HelperPaths,
        executor: Arc<dyn HelperExecutor>,
    ) -> Self {
        Self {
            catalog,
            paths,
            executor,
            unknown_tools: UnknownToolPolicy::default(),
        }
    }

    /// Sets how calls to tools outside the catalog are handled.
    pub fn with_unknown_tool_policy(mut self, policy: UnknownToolPolicy) -> Self {
        self.unknown_tools = policy;
        self
    }

    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    pub fn paths(&self) -> &HelperPaths {
        &self.paths
    }

    /// Resolves which helper serves `name`.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::UnknownTool` if `name` is not in the catalog
    /// and the policy is `Reject`.
    pub fn route(&self, name: &str) -> Result<HelperKind, RuntimeError> {
        if let Some(tool) = self.catalog.find(name) {
            return Ok(tool.helper);
        }
        match self.unknown_tools {
            UnknownToolPolicy::Reject => Err(RuntimeError::UnknownTool {
                name: name.to_string(),
            }),
            UnknownToolPolicy::General => {
                warn!(tool = name, "forwarding unknown tool to spreadsheet helper");
                Ok(HelperKind::Spreadsheet)
            }
        }
    }

    /// Builds the helper invocation for a call without running it.
    ///
    /// # Errors
    ///
    /// Returns `UnknownTool` (see [`Self::route`]) or `InvalidArguments`
    /// if `arguments` is not a JSON object.
    pub fn invocation(
        &self,
        name: &str,
        arguments: &Value,
    ) -> Result<HelperInvocation, RuntimeError> {
        let kind = self.route(name)?;
        if !arguments.is_object() {
            return Err(RuntimeError::InvalidArguments {
                tool: name.to_string(),
                message: "arguments must be a JSON object".to_string(),
            });
        }
        Ok(HelperInvocation::new(
            self.paths.interpreter(),
            self.paths.script_for(kind),
            name,
            arguments,
        ))
    }

    /// Runs one tool call through its helper and interprets the result.
    ///
    /// # Errors
    ///
    /// Any `RuntimeError`; no retries are attempted.
    #[tracing::instrument(skip(self, arguments), fields(tool = %name))]
    pub async fn call(&self, name: &str, arguments: &Value) -> Result<ResultEnvelope, RuntimeError> {
        let invocation = self.invocation(name, arguments)?;
        let output = self.executor.execute(&invocation).await?;
        let duration_ms = output.duration_ms;

        match interpret_output(output) {
            Ok(envelope) => {
                info!(duration_ms, "tool call succeeded");
                Ok(envelope)
            }
            Err(e) => {
                warn!(duration_ms, error = %e, "tool call failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use crate::types::HelperOutput;

    /// Records invocations and answers with a fixed output.
    struct RecordingExecutor {
        seen: Mutex<Vec<HelperInvocation>>,
        reply: HelperOutput,
    }

    impl RecordingExecutor {
        fn replying(stdout: &str) -> Arc<Self> {
            Arc::new(Self {
                seen: Mutex::new(Vec::new()),
                reply: HelperOutput {
                    exit_code: Some(0),
                    stdout: stdout.to_string(),
                    ..HelperOutput::default()
                },
            })
        }

        fn seen(&self) -> Vec<HelperInvocation> {
            self.seen.lock().expect("lock").clone()
        }
    }

    #[async_trait]
    impl HelperExecutor for RecordingExecutor {
        async fn execute(
            &self,
            invocation: &HelperInvocation,
        ) -> Result<HelperOutput, RuntimeError> {
            self.seen.lock().expect("lock").push(invocation.clone());
            Ok(self.reply.clone())
        }
    }

    fn dispatcher(executor: Arc<RecordingExecutor>) -> HelperDispatcher {
        let paths = HelperPaths::new("python3", "/h/excel_operations.py", "/h/financial.py");
        HelperDispatcher::new(Arc::new(ToolCatalog::standard()), paths, executor)
    }

    #[tokio::test]
    async fn financial_tool_uses_financial_script() {
        let exec = RecordingExecutor::replying(r#"{"success": true}"#);
        let d = dispatcher(exec.clone());
        d.call("process_financial_problem", &json!({"problem_text": "X"}))
            .await
            .expect("call");
        let seen = exec.seen();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].script(), Path::new("/h/financial.py"));
        assert_eq!(seen[0].tool_name, "process_financial_problem");
        assert_eq!(seen[0].arguments, r#"{"problem_text":"X"}"#);
    }

    #[tokio::test]
    async fn spreadsheet_tools_use_general_script() {
        let exec = RecordingExecutor::replying(r#"{"success": true}"#);
        let d = dispatcher(exec.clone());
        for name in ["read_worksheet", "write_worksheet", "create_workbook"] {
            d.call(name, &json!({})).await.expect("call");
        }
        for inv in exec.seen() {
            assert_eq!(inv.script(), Path::new("/h/excel_operations.py"));
            assert_eq!(inv.executable, "python3");
        }
    }

    #[tokio::test]
    async fn unknown_tool_rejected_without_spawn() {
        let exec = RecordingExecutor::replying(r#"{"success": true}"#);
        let d = dispatcher(exec.clone());
        let err = d.call("delete_sheet", &json!({})).await.expect_err("reject");
        assert!(matches!(err, RuntimeError::UnknownTool { .. }));
        assert!(exec.seen().is_empty());
    }

    #[tokio::test]
    async fn unknown_tool_forwarded_when_permissive() {
        let exec = RecordingExecutor::replying(r#"{"success": true}"#);
        let d = dispatcher(exec.clone()).with_unknown_tool_policy(UnknownToolPolicy::General);
        d.call("delete_sheet", &json!({})).await.expect("forwarded");
        let seen = exec.seen();
        assert_eq!(seen[0].script(), Path::new("/h/excel_operations.py"));
        assert_eq!(seen[0].tool_name, "delete_sheet");
    }

    #[tokio::test]
    async fn non_object_arguments_rejected_without_spawn() {
        let exec = RecordingExecutor::replying(r#"{"success": true}"#);
        let d = dispatcher(exec.clone());
        let err = d
            .call("read_worksheet", &json!(["a"]))
            .await
            .expect_err("reject");
        assert!(matches!(err, RuntimeError::InvalidArguments { .. }));
        assert!(exec.seen().is_empty());
    }

    #[tokio::test]
    async fn reported_failure_propagates() {
        let exec = RecordingExecutor::replying(r#"{"success": false, "error": "file not found"}"#);
        let d = dispatcher(exec);
        let err = d
            .call("read_worksheet", &json!({"file_path": "x", "sheet_name": "y"}))
            .await
            .expect_err("failure");
        assert_eq!(err.to_string(), "file not found");
    }
}
