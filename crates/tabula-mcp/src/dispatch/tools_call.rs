//! Handles the `tools/call` MCP method.

use serde_json::Value;

use tabula_protocol::mcp::tools::{ToolsCallParams, ToolsCallResult};
use tabula_protocol::{error_codes, JsonRpcErrorResponse, RequestId};
use tabula_runtime::{HelperDispatcher, RuntimeError};

use super::success;
use crate::handler::JsonRpcOutput;

/// Handles the `tools/call` request.
///
/// Every helper-side failure becomes a JSON-RPC internal error whose
/// message is the runtime error's display text.
pub(crate) async fn handle_tools_call(
    id: RequestId,
    params: &Option<Value>,
    dispatcher: &HelperDispatcher,
) -> JsonRpcOutput {
    // 1. Parse params
    let call_params = match params {
        Some(p) => match serde_json::from_value::<ToolsCallParams>(p.clone()) {
            Ok(cp) => cp,
            Err(e) => {
                return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("invalid tools/call params: {e}"),
                ));
            }
        },
        None => {
            return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                id,
                error_codes::INVALID_PARAMS,
                "tools/call requires params",
            ));
        }
    };

    // 2. Route, spawn, interpret
    tracing::debug!(tool = %call_params.name, %id, "executing tool via MCP");
    let envelope = match dispatcher
        .call(&call_params.name, &call_params.arguments)
        .await
    {
        Ok(envelope) => envelope,
        Err(e) => {
            return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                id,
                error_code_for(&e),
                e.to_string(),
            ))
        }
    };

    // 3. Relay the whole envelope as pretty JSON text
    match envelope.to_pretty() {
        Ok(text) => success(id, ToolsCallResult::text(text)),
        Err(e) => JsonRpcOutput::Error(JsonRpcErrorResponse::internal(id, e.to_string())),
    }
}

/// Calls refused before spawning are parameter errors; the rest are internal.
fn error_code_for(e: &RuntimeError) -> i32 {
    if e.is_rejected_before_spawn() {
        error_codes::INVALID_PARAMS
    } else {
        error_codes::INTERNAL_ERROR
    }
}
