//! Handles the `initialize` MCP method.

use serde_json::Value;

use tabula_protocol::mcp::initialize::{
    Implementation, InitializeParams, InitializeResult, ServerCapabilities, ToolCapability,
    PROTOCOL_VERSION,
};
use tabula_protocol::{error_codes, JsonRpcErrorResponse, RequestId};

use super::success;
use crate::handler::{JsonRpcOutput, SERVER_NAME};

/// Handles the `initialize` request and returns the server capabilities.
pub(crate) fn handle_initialize(id: RequestId, params: &Option<Value>) -> JsonRpcOutput {
    if let Some(p) = params {
        match serde_json::from_value::<InitializeParams>(p.clone()) {
            Ok(params) => tracing::info!(
                client = %params.client_info.name,
                client_version = %params.client_info.version,
                requested = %params.protocol_version,
                "client connected"
            ),
            Err(e) => {
                return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("invalid initialize params: {e}"),
                ));
            }
        }
    }

    let result = InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolCapability {}),
        },
        server_info: Implementation {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    success(id, result)
}
