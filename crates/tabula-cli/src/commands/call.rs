//! `tabula call` command.
//!
//! Runs a single tool call through the same route/launch/interpret path
//! the server uses, without speaking MCP. Handy for checking a helper
//! installation by hand.

use clap::Args;

use tabula_config::TabulaConfig;
use tabula_protocol::schema::validate_arguments;
use tabula_types::TabulaError;

use crate::{input, output, shared};

/// Call one tool and print its result envelope.
#[derive(Debug, Args)]
pub struct CallArgs {
    /// Tool name, e.g. read_worksheet.
    pub tool: String,
    /// JSON arguments object.
    #[arg(short, long, default_value = "{}")]
    pub input: String,
    /// Read JSON arguments from a file (use "-" for stdin).
    #[arg(short = 'f', long)]
    pub input_file: Option<String>,
    /// Send the arguments even if they do not match the tool's input schema.
    #[arg(long)]
    pub no_validate: bool,
}

/// Executes the call command.
pub async fn execute(args: &CallArgs, config: &TabulaConfig) -> anyhow::Result<()> {
    let arguments = input::resolve_arguments(&args.input, args.input_file.as_deref())?;

    let dispatcher = shared::build_dispatcher(config)?;

    if !args.no_validate {
        if let Some(tool) = dispatcher.catalog().find(&args.tool) {
            validate_arguments(&tool.input_schema, &arguments).map_err(|e| {
                TabulaError::invalid_input(e.to_string()).with_context(tool_context(&args.tool))
            })?;
        }
    }

    tracing::info!(tool = %args.tool, "calling tool");

    let envelope = dispatcher
        .call(&args.tool, &arguments)
        .await
        .map_err(|e| {
            output::print_diagnostic(&e);
            TabulaError::from(e).with_context(tool_context(&args.tool))
        })?;

    println!("{}", envelope.to_pretty()?);
    Ok(())
}

fn tool_context(tool: &str) -> String {
    format!("tool: {tool}")
}
