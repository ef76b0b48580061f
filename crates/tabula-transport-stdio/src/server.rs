//! MCP server loop over stdio transport.
//!
//! Reads JSON-RPC messages line by line and answers them. Requests run
//! concurrently, each in its own task, so a slow helper never holds up
//! the rest; responses are written by the loop alone, one whole line at
//! a time, in completion order. Notifications (no `id`) get no response.

use std::sync::Arc;

use serde_json::Value;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use tabula_mcp::{JsonRpcOutput, McpHandler};
use tabula_protocol::{JsonRpcErrorResponse, JsonRpcNotification, JsonRpcRequest, RequestId};

use crate::error::TransportError;
use crate::transport::StdioTransport;

/// MCP server that reads from a transport and dispatches to a handler.
pub struct McpServer<R, W> {
    transport: StdioTransport<R, W>,
    handler: Arc<McpHandler>,
}

impl<R, W> McpServer<R, W>
where
    R: tokio::io::AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    /// Creates a new server with the given transport and handler.
    pub fn new(transport: StdioTransport<R, W>, handler: McpHandler) -> Self {
        Self {
            transport,
            handler: Arc::new(handler),
        }
    }

    /// Runs the server loop until the input is closed and every
    /// in-flight request has been answered.
    ///
    /// # Errors
    ///
    /// Only transport failures end the loop; per-request failures are
    /// answered with JSON-RPC errors.
    pub async fn run(&mut self) -> Result<(), TransportError> {
        info!("MCP server starting on stdio");

        let mut in_flight: JoinSet<JsonRpcOutput> = JoinSet::new();
        let mut input_open = true;

        loop {
            tokio::select! {
                line = self.transport.read_line(), if input_open => match line? {
                    Some(line) if line.is_empty() => {}
                    Some(line) => {
                        if let Some(output) = self.accept(&line, &mut in_flight) {
                            self.write_output(&output).await?;
                        }
                    }
                    None => {
                        info!(pending = in_flight.len(), "stdin closed, draining");
                        input_open = false;
                    }
                },
                Some(joined) = in_flight.join_next() => match joined {
                    Ok(output) => self.write_output(&output).await?,
                    Err(e) => error!(error = %e, "request task failed"),
                },
                else => break,
            }
        }

        info!("MCP server stopped");
        Ok(())
    }

    /// Parses one line. Requests are spawned onto `in_flight`; an
    /// immediate response is returned only for input that is neither a
    /// request nor a notification.
    fn accept(&self, line: &str, in_flight: &mut JoinSet<JsonRpcOutput>) -> Option<JsonRpcOutput> {
        // 1. A request has an `id`
        if let Ok(request) = serde_json::from_str::<JsonRpcRequest>(line) {
            debug!(method = %request.method, id = %request.id, "received request");
            let handler = Arc::clone(&self.handler);
            in_flight.spawn(async move {
                let id = request.id.clone();
                // Run in a nested task so a panic still yields a response.
                match tokio::spawn(async move { handler.dispatch(&request).await }).await {
                    Ok(output) => output,
                    Err(e) => {
                        error!(%id, error = %e, "request handler panicked");
                        JsonRpcOutput::Error(JsonRpcErrorResponse::internal(id, e.to_string()))
                    }
                }
            });
            return None;
        }

        // 2. Fall back: try as notification (no `id` field)
        match serde_json::from_str::<JsonRpcNotification>(line) {
            Ok(notif) => {
                debug!(method = %notif.method, "received notification");
                self.handler.handle_notification(&notif);
                None
            }
            Err(e) => reject(line, &e),
        }
    }

    /// Serializes and writes a JSON-RPC output to the transport.
    async fn write_output(&mut self, output: &JsonRpcOutput) -> Result<(), TransportError> {
        match output.to_json() {
            Ok(json) => self.transport.write_line(&json).await,
            Err(e) => {
                error!(error = %e, "failed to serialize response");
                Err(TransportError::Write(e.to_string()))
            }
        }
    }
}

/// Answers a line that is not a request or notification.
///
/// Malformed JSON is a parse error with id `0`. Well-formed JSON of the
/// wrong shape is an invalid request, answered with its own id when it
/// has a usable one. Responses sent by the client are dropped.
fn reject(line: &str, cause: &serde_json::Error) -> Option<JsonRpcOutput> {
    let value = match serde_json::from_str::<Value>(line) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "failed to parse JSON-RPC message");
            return Some(JsonRpcOutput::Error(JsonRpcErrorResponse::parse_error(
                format!("parse error: {e}"),
            )));
        }
    };

    let is_response = value.get("method").is_none()
        && (value.get("result").is_some() || value.get("error").is_some());
    if is_response {
        debug!(id = ?value.get("id"), "ignoring response from client");
        return None;
    }

    warn!(error = %cause, "invalid JSON-RPC message");
    let id = value
        .get("id")
        .and_then(|id| serde_json::from_value::<RequestId>(id.clone()).ok())
        .unwrap_or(RequestId::Number(0));
    Some(JsonRpcOutput::Error(JsonRpcErrorResponse::invalid_request(
        id,
        format!("invalid request: {cause}"),
    )))
}
