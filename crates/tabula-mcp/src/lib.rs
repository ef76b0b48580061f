//! # tabula-mcp
//!
//! MCP method dispatch handler (APPLICATION layer).
//!
//! Provides `McpHandler` and `JsonRpcOutput` for routing JSON-RPC requests
//! to the MCP method implementations backed by a `HelperDispatcher`.

mod dispatch;
pub mod handler;

pub use dispatch::tools_list::list_result;
pub use handler::{JsonRpcOutput, McpHandler, SERVER_NAME};
