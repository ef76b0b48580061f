//! MCP request handler.

use std::sync::Arc;

use tracing::{debug, warn};

use tabula_protocol::mcp::methods;
use tabula_protocol::{
    error_codes, JsonRpcErrorResponse, JsonRpcNotification, JsonRpcRequest, JsonRpcResponse,
};
use tabula_runtime::HelperDispatcher;

use crate::dispatch::{initialize, success, tools_call, tools_list};

/// Name reported in `serverInfo`.
pub const SERVER_NAME: &str = "tabula";

/// Either a success or an error response, ready to serialize.
#[derive(Debug, Clone)]
pub enum JsonRpcOutput {
    Success(JsonRpcResponse),
    Error(JsonRpcErrorResponse),
}

impl JsonRpcOutput {
    /// Serializes to a single JSON line (no trailing newline).
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::Success(r) => serde_json::to_string(r),
            Self::Error(e) => serde_json::to_string(e),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Routes JSON-RPC requests to MCP method implementations.
///
/// Stateless apart from the shared dispatcher, so one handler can serve
/// any number of concurrent requests.
#[derive(Clone)]
pub struct McpHandler {
    dispatcher: Arc<HelperDispatcher>,
}

impl McpHandler {
    pub fn new(dispatcher: Arc<HelperDispatcher>) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &HelperDispatcher {
        &self.dispatcher
    }

    /// Dispatches a request to its method and returns the response.
    pub async fn dispatch(&self, request: &JsonRpcRequest) -> JsonRpcOutput {
        let id = request.id.clone();
        match request.method.as_str() {
            methods::INITIALIZE => initialize::handle_initialize(id, &request.params),
            methods::PING => success(id, serde_json::json!({})),
            methods::TOOLS_LIST => tools_list::handle_tools_list(id, self.dispatcher.catalog()),
            methods::TOOLS_CALL => {
                tools_call::handle_tools_call(id, &request.params, &self.dispatcher).await
            }
            other => {
                debug!(method = other, "unknown method");
                JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                    id,
                    error_codes::METHOD_NOT_FOUND,
                    format!("unknown method: {other}"),
                ))
            }
        }
    }

    /// Handles a notification. Notifications never produce a response.
    pub fn handle_notification(&self, notification: &JsonRpcNotification) {
        match notification.method.as_str() {
            methods::NOTIFICATIONS_INITIALIZED => debug!("client initialized"),
            // Calls cannot be cancelled: a spawned helper always runs to completion.
            methods::NOTIFICATIONS_CANCELLED => {
                debug!(params = ?notification.params, "cancellation ignored")
            }
            other => warn!(method = other, "ignoring unknown notification"),
        }
    }
}
