//! The immutable tool catalog.
//!
//! The catalog is built once at startup and owned by the dispatcher for
//! the lifetime of the process. Order is preserved for `tools/list`.

use serde_json::json;

use crate::tool::{HelperKind, ToolDescriptor};

/// Ordered, immutable set of tool descriptors with unique names.
#[derive(Debug, Clone)]
pub struct ToolCatalog {
    tools: Vec<ToolDescriptor>,
}

impl ToolCatalog {
    /// Builds a catalog from descriptors.
    ///
    /// Later descriptors with a name already present are dropped, so
    /// every name resolves to exactly one helper.
    pub fn new(descriptors: impl IntoIterator<Item = ToolDescriptor>) -> Self {
        let mut tools: Vec<ToolDescriptor> = Vec::new();
        for d in descriptors {
            if !tools.iter().any(|t| t.name == d.name) {
                tools.push(d);
            }
        }
        Self { tools }
    }

    /// The spreadsheet catalog served by tabula.
    pub fn standard() -> Self {
        Self::new([
            read_worksheet(),
            write_worksheet(),
            create_workbook(),
            process_financial_problem(),
        ])
    }

    /// Looks up a tool by name.
    pub fn find(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// Iterates descriptors in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.iter()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

fn read_worksheet() -> ToolDescriptor {
    ToolDescriptor::new(
        "read_worksheet",
        "Read data from an Excel worksheet",
        json!({
            "type": "object",
            "properties": {
                "file_path": {
                    "type": "string",
                    "description": "Path to the Excel file"
                },
                "sheet_name": {
                    "type": "string",
                    "description": "Name of the worksheet to read"
                },
                "range": {
                    "type": "string",
                    "description": "Optional range to read (e.g., \"A1:B10\")"
                }
            },
            "required": ["file_path", "sheet_name"]
        }),
        HelperKind::Spreadsheet,
    )
}

fn write_worksheet() -> ToolDescriptor {
    ToolDescriptor::new(
        "write_worksheet",
        "Write data to an Excel worksheet",
        json!({
            "type": "object",
            "properties": {
                "file_path": {
                    "type": "string",
                    "description": "Path to the Excel file"
                },
                "sheet_name": {
                    "type": "string",
                    "description": "Name of the worksheet to write to"
                },
                "range": {
                    "type": "string",
                    "description": "Starting cell or range to write to (e.g., \"A1\")"
                },
                "data": {
                    "type": "array",
                    "description": "Data to write (2D array)",
                    "items": {
                        "type": "array",
                        "items": {
                            "type": ["string", "number", "boolean", "null"]
                        }
                    }
                }
            },
            "required": ["file_path", "sheet_name", "range", "data"]
        }),
        HelperKind::Spreadsheet,
    )
}

fn create_workbook() -> ToolDescriptor {
    ToolDescriptor::new(
        "create_workbook",
        "Create a new Excel workbook",
        json!({
            "type": "object",
            "properties": {
                "file_path": {
                    "type": "string",
                    "description": "Path where to create the Excel file"
                },
                "sheets": {
                    "type": "array",
                    "description": "List of sheet names to create",
                    "items": { "type": "string" }
                }
            },
            "required": ["file_path"]
        }),
        HelperKind::Spreadsheet,
    )
}

fn process_financial_problem() -> ToolDescriptor {
    ToolDescriptor::new(
        "process_financial_problem",
        "Process a financial problem through analysis, solution, and Excel instruction generation",
        json!({
            "type": "object",
            "properties": {
                "problem_text": {
                    "type": "string",
                    "description": "The financial problem text to process"
                }
            },
            "required": ["problem_text"]
        }),
        HelperKind::Financial,
    )
}
