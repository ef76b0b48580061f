//! Helper script resolution.
//!
//! Maps each `HelperKind` to exactly one script file plus the interpreter
//! that runs it. By default scripts sit next to the tabula executable.

use std::path::{Path, PathBuf};

use tabula_types::HelperKind;

use crate::error::RuntimeError;

/// Interpreter and script locations for both helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperPaths {
    interpreter: String,
    spreadsheet: PathBuf,
    financial: PathBuf,
}

impl HelperPaths {
    /// Creates paths from explicit script locations.
    pub fn new(
        interpreter: impl Into<String>,
        spreadsheet: impl Into<PathBuf>,
        financial: impl Into<PathBuf>,
    ) -> Self {
        Self {
            interpreter: interpreter.into(),
            spreadsheet: spreadsheet.into(),
            financial: financial.into(),
        }
    }

    /// Joins both script names onto `dir`.
    pub fn in_dir(
        interpreter: impl Into<String>,
        dir: &Path,
        spreadsheet_script: &str,
        financial_script: &str,
    ) -> Self {
        Self::new(
            interpreter,
            dir.join(spreadsheet_script),
            dir.join(financial_script),
        )
    }

    /// Resolves both scripts relative to the running executable's directory.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::ScriptDir` if the executable path is unknown.
    pub fn beside_executable(
        interpreter: impl Into<String>,
        spreadsheet_script: &str,
        financial_script: &str,
    ) -> Result<Self, RuntimeError> {
        let exe = std::env::current_exe().map_err(|e| RuntimeError::ScriptDir(e.to_string()))?;
        let dir = exe.parent().ok_or_else(|| {
            RuntimeError::ScriptDir(format!("executable has no parent: {}", exe.display()))
        })?;
        Ok(Self::in_dir(
            interpreter,
            dir,
            spreadsheet_script,
            financial_script,
        ))
    }

    /// Script that serves tools of the given kind.
    pub fn script_for(&self, kind: HelperKind) -> &Path {
        match kind {
            HelperKind::Spreadsheet => &self.spreadsheet,
            HelperKind::Financial => &self.financial,
        }
    }

    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }
}
