//! Tool descriptor and routing target types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Which external helper program a tool is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HelperKind {
    /// General spreadsheet operations (read, write, create).
    Spreadsheet,
    /// Financial problem analysis pipeline.
    Financial,
}

impl fmt::Display for HelperKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spreadsheet => f.write_str("spreadsheet"),
            Self::Financial => f.write_str("financial"),
        }
    }
}

/// What to do with a `tools/call` naming a tool outside the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownToolPolicy {
    /// Reject before any helper is spawned.
    #[default]
    Reject,
    /// Forward to the general spreadsheet helper.
    General,
}

/// A named, schema-described tool advertised to MCP clients.
///
/// Immutable once built. `helper` is the routing target and is never
/// exposed on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDescriptor {
    /// Unique tool name within the catalog.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// JSON Schema object describing the tool's arguments.
    pub input_schema: Value,
    /// Helper program that executes this tool.
    pub helper: HelperKind,
}

impl ToolDescriptor {
    /// Creates a new descriptor.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Value,
        helper: HelperKind,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
            helper,
        }
    }

    /// Names listed in the schema's `required` array.
    pub fn required_arguments(&self) -> Vec<&str> {
        self.input_schema
            .get("required")
            .and_then(Value::as_array)
            .map(|arr| arr.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}
