//! A single helper process invocation.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde_json::Value;

/// `<executable> <script_path> <tool_name> <arguments>`, built per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperInvocation {
    /// Interpreter launched for the script.
    pub executable: String,
    /// Script file handed to the interpreter.
    pub script_path: PathBuf,
    /// Tool name, passed through unchanged.
    pub tool_name: String,
    /// Compact JSON serialization of the call arguments.
    pub arguments: String,
}

impl HelperInvocation {
    /// Builds an invocation, serializing `arguments` to compact JSON.
    pub fn new(
        executable: impl Into<String>,
        script_path: impl Into<PathBuf>,
        tool_name: impl Into<String>,
        arguments: &Value,
    ) -> Self {
        Self {
            executable: executable.into(),
            script_path: script_path.into(),
            tool_name: tool_name.into(),
            arguments: arguments.to_string(),
        }
    }

    /// Process arguments in order: script path, tool name, JSON arguments.
    pub fn argv(&self) -> [&OsStr; 3] {
        [
            self.script_path.as_os_str(),
            OsStr::new(&self.tool_name),
            OsStr::new(&self.arguments),
        ]
    }

    pub fn script(&self) -> &Path {
        &self.script_path
    }
}
