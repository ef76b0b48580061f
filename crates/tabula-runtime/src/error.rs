//! Runtime-specific error types.

use tabula_types::{DiagnosticError, ErrorKind, TabulaError};
use thiserror::Error;

/// Errors from routing, launching or interpreting a helper call.
///
/// The three helper-failure variants (`InvalidOutput`, `Reported`,
/// `Exited`) reach MCP clients as one internal-error kind and differ only
/// by message.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The tool is not in the catalog and the policy rejects it.
    #[error("unknown tool: {name}")]
    UnknownTool { name: String },
    /// Call arguments are not a JSON object.
    #[error("invalid arguments for '{tool}': {message}")]
    InvalidArguments { tool: String, message: String },
    /// The helper directory could not be determined.
    #[error("cannot locate helper scripts: {0}")]
    ScriptDir(String),
    /// The helper process could not be started.
    #[error("failed to launch helper '{script}': {source}")]
    Launch {
        script: String,
        #[source]
        source: std::io::Error,
    },
    /// Exit 0 but stdout is not a JSON document.
    #[error("Invalid JSON output: {stdout}")]
    InvalidOutput { stdout: String },
    /// Exit 0 with an envelope whose `success` is falsy.
    #[error("{message}")]
    Reported { message: String },
    /// Non-zero exit or death by signal.
    #[error("Helper script error: {stderr}")]
    Exited { code: Option<i32>, stderr: String },
}

impl RuntimeError {
    /// Whether the call was refused before any process was spawned.
    pub fn is_rejected_before_spawn(&self) -> bool {
        matches!(
            self,
            Self::UnknownTool { .. } | Self::InvalidArguments { .. }
        )
    }
}

impl From<RuntimeError> for TabulaError {
    fn from(e: RuntimeError) -> Self {
        match &e {
            RuntimeError::UnknownTool { .. } => TabulaError::not_found(e.to_string()),
            RuntimeError::InvalidArguments { .. } => TabulaError::invalid_input(e.to_string()),
            RuntimeError::ScriptDir(_) | RuntimeError::Launch { .. } => {
                TabulaError::new(ErrorKind::Internal, e.to_string())
            }
            RuntimeError::InvalidOutput { .. }
            | RuntimeError::Reported { .. }
            | RuntimeError::Exited { .. } => TabulaError::new(ErrorKind::Helper, e.to_string()),
        }
    }
}

impl DiagnosticError for RuntimeError {
    fn hint(&self) -> Option<String> {
        match self {
            Self::UnknownTool { name } => Some(format!(
                "'{name}' is not one of the advertised tools (see `tabula tools`)."
            )),
            Self::Launch { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                Some("The helper interpreter was not found on PATH.".into())
            }
            Self::InvalidOutput { .. } => {
                Some("The helper printed something other than a single JSON object.".into())
            }
            Self::Exited { code: None, .. } => {
                Some("The helper was terminated by a signal.".into())
            }
            Self::Exited { code: Some(code), .. } => {
                Some(format!("The helper exited with status {code}."))
            }
            _ => None,
        }
    }

    fn fix(&self) -> Option<String> {
        match self {
            Self::UnknownTool { .. } => Some(
                "Use a catalog tool, or set routing.unknown_tools = \"general\" to forward it."
                    .into(),
            ),
            Self::Launch { .. } | Self::ScriptDir(_) => Some(
                "Check [helpers] interpreter and script_dir in the config file:\n  [helpers]\n  interpreter = \"python3\"\n  script_dir = \"/path/to/scripts\""
                    .into(),
            ),
            Self::InvalidOutput { .. } => {
                Some("Make sure the helper writes logs to stderr, not stdout.".into())
            }
            _ => None,
        }
    }
}
