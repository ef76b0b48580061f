//! End-to-end helper execution through real child processes.
//!
//! Helpers are tiny POSIX shell scripts run with `sh`, standing in for
//! the spreadsheet and financial scripts.

#![cfg(unix)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::{json, Value};
use tempfile::TempDir;

use tabula_runtime::{HelperDispatcher, HelperPaths, ProcessExecutor, RuntimeError};
use tabula_types::{ToolCatalog, UnknownToolPolicy};

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).expect("write script");
    path
}

/// Both helpers print which script ran, the tool name and the arguments.
fn echo_helpers() -> (TempDir, HelperDispatcher) {
    let dir = tempfile::tempdir().expect("tempdir");
    write_script(
        dir.path(),
        "general.sh",
        "printf '{\"success\": true, \"helper\": \"general\", \"tool\": \"%s\", \"args\": %s}' \"$1\" \"$2\"\n",
    );
    write_script(
        dir.path(),
        "financial.sh",
        "printf '{\"success\": true, \"helper\": \"financial\", \"tool\": \"%s\", \"args\": %s}' \"$1\" \"$2\"\n",
    );
    let dispatcher = dispatcher_in(dir.path());
    (dir, dispatcher)
}

fn dispatcher_in(dir: &Path) -> HelperDispatcher {
    let paths = HelperPaths::in_dir("sh", dir, "general.sh", "financial.sh");
    HelperDispatcher::new(
        Arc::new(ToolCatalog::standard()),
        paths,
        Arc::new(ProcessExecutor::new()),
    )
}

/// A dispatcher whose general helper runs `body`.
fn general_helper(body: &str) -> (TempDir, HelperDispatcher) {
    let dir = tempfile::tempdir().expect("tempdir");
    write_script(dir.path(), "general.sh", body);
    write_script(dir.path(), "financial.sh", "exit 99\n");
    let dispatcher = dispatcher_in(dir.path());
    (dir, dispatcher)
}

#[tokio::test]
async fn financial_problem_routes_to_financial_helper() {
    let (_dir, d) = echo_helpers();
    let env = d
        .call("process_financial_problem", &json!({"problem_text": "X"}))
        .await
        .expect("call");
    assert_eq!(env.as_value()["helper"], "financial");
    assert_eq!(env.as_value()["tool"], "process_financial_problem");
    assert_eq!(env.as_value()["args"], json!({"problem_text": "X"}));
}

#[tokio::test]
async fn spreadsheet_tools_route_to_general_helper() {
    let (_dir, d) = echo_helpers();
    for name in ["read_worksheet", "write_worksheet", "create_workbook"] {
        let env = d
            .call(name, &json!({"file_path": "book.xlsx"}))
            .await
            .expect("call");
        assert_eq!(env.as_value()["helper"], "general", "{name}");
        assert_eq!(env.as_value()["tool"], name);
    }
}

#[tokio::test]
async fn success_envelope_is_forwarded_verbatim() {
    let (_dir, d) = general_helper("printf '%s' '{\"success\": true, \"data\": [[1,2]]}'\n");
    let env = d
        .call("read_worksheet", &json!({"file_path": "a", "sheet_name": "b"}))
        .await
        .expect("call");
    let text = env.to_pretty().expect("pretty");
    let parsed: Value = serde_json::from_str(&text).expect("json");
    assert_eq!(parsed, json!({"success": true, "data": [[1, 2]]}));
}

#[tokio::test]
async fn reported_failure_message_is_exact() {
    let (_dir, d) =
        general_helper("printf '%s' '{\"success\": false, \"error\": \"file not found\"}'\n");
    let err = d
        .call("read_worksheet", &json!({"file_path": "a", "sheet_name": "b"}))
        .await
        .expect_err("failure");
    assert!(matches!(err, RuntimeError::Reported { .. }));
    assert_eq!(err.to_string(), "file not found");
}

#[tokio::test]
async fn non_json_output_is_reported_with_stdout() {
    let (_dir, d) = general_helper("echo oops\n");
    let err = d
        .call("create_workbook", &json!({"file_path": "a"}))
        .await
        .expect_err("failure");
    assert!(matches!(err, RuntimeError::InvalidOutput { .. }));
    assert!(err.to_string().contains("oops"));
}

#[tokio::test]
async fn nonzero_exit_is_reported_with_stderr() {
    let (_dir, d) = general_helper("echo 'disk full' >&2\nexit 2\n");
    let err = d
        .call("write_worksheet", &json!({}))
        .await
        .expect_err("failure");
    assert!(matches!(err, RuntimeError::Exited { code: Some(2), .. }));
    assert!(err.to_string().contains("disk full"));
}

#[tokio::test]
async fn helper_stdin_is_closed() {
    let (_dir, d) = general_helper(
        "if read -r line; then printf '%s' '{\"success\": false, \"error\": \"read stdin\"}'; \
         else printf '%s' '{\"success\": true}'; fi\n",
    );
    d.call("create_workbook", &json!({"file_path": "a"}))
        .await
        .expect("stdin must be at EOF");
}

#[tokio::test]
async fn missing_interpreter_is_launch_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let paths = HelperPaths::in_dir(
        "/nonexistent/tabula-interpreter",
        dir.path(),
        "general.sh",
        "financial.sh",
    );
    let d = HelperDispatcher::new(
        Arc::new(ToolCatalog::standard()),
        paths,
        Arc::new(ProcessExecutor::new()),
    );
    let err = d
        .call("create_workbook", &json!({"file_path": "a"}))
        .await
        .expect_err("launch");
    assert!(matches!(err, RuntimeError::Launch { .. }));
}

#[tokio::test]
async fn permissive_policy_passes_unknown_name_to_general_helper() {
    let (dir, _) = echo_helpers();
    let d = dispatcher_in(dir.path()).with_unknown_tool_policy(UnknownToolPolicy::General);
    let env = d.call("delete_sheet", &json!({})).await.expect("call");
    assert_eq!(env.as_value()["helper"], "general");
    assert_eq!(env.as_value()["tool"], "delete_sheet");
}

#[tokio::test]
async fn concurrent_calls_keep_buffers_apart() {
    let (_dir, d) = general_helper(
        "printf '{\"success\": true, '\n\
         echo \"start $2\" >&2\n\
         sleep 1\n\
         printf '\"args\": %s}' \"$2\"\n\
         echo \"end $2\" >&2\n",
    );
    let a = json!({"file_path": "a.xlsx", "sheet_name": "A"});
    let b = json!({"file_path": "b.xlsx", "sheet_name": "B"});

    let (ra, rb) = tokio::join!(d.call("read_worksheet", &a), d.call("read_worksheet", &b));

    assert_eq!(ra.expect("a").as_value()["args"], a);
    assert_eq!(rb.expect("b").as_value()["args"], b);
}
