//! Shared helpers used across CLI commands.
//!
//! Turns the loaded configuration into the process-wide dispatcher so
//! `serve` and `call` resolve helpers identically.

use std::path::Path;
use std::sync::Arc;

use tabula_config::{HelperConfig, TabulaConfig};
use tabula_runtime::{HelperDispatcher, HelperPaths, ProcessExecutor, RuntimeError};
use tabula_types::{TabulaError, ToolCatalog};

use crate::output;

/// Builds the dispatcher: standard catalog, configured helper paths,
/// real process executor and the configured unknown-tool policy.
///
/// # Errors
///
/// Returns an error if the helper script directory cannot be determined.
pub fn build_dispatcher(config: &TabulaConfig) -> anyhow::Result<HelperDispatcher> {
    let paths = helper_paths(&config.helpers).map_err(|e| {
        output::print_diagnostic(&e);
        TabulaError::from(e)
    })?;

    tracing::debug!(
        interpreter = paths.interpreter(),
        spreadsheet = %paths.script_for(tabula_types::HelperKind::Spreadsheet).display(),
        financial = %paths.script_for(tabula_types::HelperKind::Financial).display(),
        "resolved helper scripts"
    );

    Ok(HelperDispatcher::new(
        Arc::new(ToolCatalog::standard()),
        paths,
        Arc::new(ProcessExecutor::new()),
    )
    .with_unknown_tool_policy(config.routing.unknown_tools))
}

/// Resolves script locations: `script_dir` if set, else beside the executable.
pub fn helper_paths(helpers: &HelperConfig) -> Result<HelperPaths, RuntimeError> {
    match &helpers.script_dir {
        Some(dir) => Ok(HelperPaths::in_dir(
            helpers.interpreter.as_str(),
            Path::new(dir),
            &helpers.general_script,
            &helpers.financial_script,
        )),
        None => HelperPaths::beside_executable(
            helpers.interpreter.as_str(),
            &helpers.general_script,
            &helpers.financial_script,
        ),
    }
}
