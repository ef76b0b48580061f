//! Handles the `tools/list` MCP method.

use tabula_protocol::mcp::tools::{McpToolDefinition, ToolsListResult};
use tabula_protocol::RequestId;
use tabula_types::ToolCatalog;

use super::success;
use crate::handler::JsonRpcOutput;

/// Handles the `tools/list` request: the whole catalog, in order, in one page.
pub(crate) fn handle_tools_list(id: RequestId, catalog: &ToolCatalog) -> JsonRpcOutput {
    success(id, list_result(catalog))
}

/// Converts the catalog to its wire form. Routing targets are not exposed.
pub fn list_result(catalog: &ToolCatalog) -> ToolsListResult {
    let tools = catalog
        .iter()
        .map(|t| McpToolDefinition {
            name: t.name.clone(),
            description: Some(t.description.clone()),
            input_schema: t.input_schema.clone(),
        })
        .collect();

    ToolsListResult {
        tools,
        next_cursor: None,
    }
}
