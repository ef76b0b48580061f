//! tabula - MCP dispatcher for spreadsheet and financial helper scripts.

use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::format::FmtSpan;

mod commands;
mod input;
mod output;
pub(crate) mod shared;

/// tabula - exposes Excel helper scripts as MCP tools over stdio.
#[derive(Debug, Parser)]
#[command(name = "tabula", version, about)]
struct Cli {
    /// Configuration file path.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbosity level (-v, -vv). Overrides `logging.level`.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format: plain (default) or json (for log aggregation).
    #[arg(long, global = true, default_value = "plain", value_parser = ["plain", "json"])]
    log_format: String,

    /// Defaults to `serve`.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the MCP server on stdin/stdout.
    Serve,
    /// List the advertised tools.
    Tools(commands::tools::ToolsArgs),
    /// Call one tool through its helper script and print the result.
    Call(commands::call::CallArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = tabula_config::load_config(cli.config.as_deref())?;

    // stdout carries the protocol, so every log line goes to stderr.
    let filter = match cli.verbose {
        0 => config.logging.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    match cli.log_format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .init(),
        _ => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    };

    tracing::debug!(config_path = ?cli.config, "tabula starting");

    match &cli.command {
        None | Some(Commands::Serve) => commands::serve::execute(&config).await,
        Some(Commands::Tools(args)) => commands::tools::execute(args),
        Some(Commands::Call(args)) => commands::call::execute(args, &config).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["tabula"]).expect("parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.log_format, "plain");
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tabula", "serve", "-vv", "--config", "t.toml"])
            .expect("parse");
        assert!(matches!(cli.command, Some(Commands::Serve)));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config.as_deref(), Some("t.toml"));
    }

    #[test]
    fn call_takes_tool_and_input() {
        let cli = Cli::try_parse_from([
            "tabula",
            "call",
            "create_workbook",
            "-i",
            r#"{"file_path":"a.xlsx"}"#,
        ])
        .expect("parse");
        match cli.command {
            Some(Commands::Call(args)) => {
                assert_eq!(args.tool, "create_workbook");
                assert_eq!(args.input, r#"{"file_path":"a.xlsx"}"#);
                assert!(args.input_file.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        assert!(Cli::try_parse_from(["tabula", "--log-format", "xml"]).is_err());
    }
}
