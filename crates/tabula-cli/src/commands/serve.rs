//! `tabula serve` command.
//!
//! Runs the MCP server over stdio until the client closes stdin or the
//! process receives SIGINT. Both end with exit status 0.

use std::sync::Arc;

use tabula_config::TabulaConfig;
use tabula_transport_stdio::{McpHandler, McpServer, StdioTransport};
use tabula_types::TabulaError;

use crate::shared;

/// Executes the serve command.
pub async fn execute(config: &TabulaConfig) -> anyhow::Result<()> {
    let dispatcher = shared::build_dispatcher(config)?;
    let handler = McpHandler::new(Arc::new(dispatcher));

    let transport = StdioTransport::new(tokio::io::stdin(), tokio::io::stdout());
    let mut server = McpServer::new(transport, handler);
    tracing::info!("tabula MCP server ready on stdio");

    tokio::select! {
        result = server.run() => {
            result.map_err(TabulaError::from)?;
        }
        signal = tokio::signal::ctrl_c() => {
            signal.map_err(|e| anyhow::anyhow!("cannot listen for SIGINT: {e}"))?;
            tracing::info!("shutdown signal received");
            // The pending stdin read runs on a blocking thread that cannot be
            // cancelled, so runtime shutdown would wait on it forever.
            std::process::exit(0);
        }
    }

    Ok(())
}
