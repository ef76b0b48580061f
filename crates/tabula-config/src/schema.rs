//! Configuration schema types.

use serde::{Deserialize, Serialize};

pub use tabula_types::UnknownToolPolicy;

/// Top-level tabula configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TabulaConfig {
    /// Helper process settings.
    #[serde(default)]
    pub helpers: HelperConfig,
    /// Call routing settings.
    #[serde(default)]
    pub routing: RoutingConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the helper scripts live and how they are launched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HelperConfig {
    /// Interpreter executable used to run every helper script.
    #[serde(default = "default_interpreter")]
    pub interpreter: String,
    /// Directory holding the scripts. `None` means the directory of the
    /// running tabula executable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_dir: Option<String>,
    /// Script handling the spreadsheet tools.
    #[serde(default = "default_general_script")]
    pub general_script: String,
    /// Script handling `process_financial_problem`.
    #[serde(default = "default_financial_script")]
    pub financial_script: String,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            script_dir: None,
            general_script: default_general_script(),
            financial_script: default_financial_script(),
        }
    }
}

fn default_interpreter() -> String {
    "python3".to_string()
}
fn default_general_script() -> String {
    "excel_operations.py".to_string()
}
fn default_financial_script() -> String {
    "process_financial_problem.py".to_string()
}

/// Call routing configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    #[serde(default)]
    pub unknown_tools: UnknownToolPolicy,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "tabula_runtime=trace").
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
