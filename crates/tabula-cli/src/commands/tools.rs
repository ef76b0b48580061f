//! `tabula tools` command.

use clap::Args;

use tabula_mcp::list_result;
use tabula_types::{ToolCatalog, ToolDescriptor};

/// List the advertised tools.
#[derive(Debug, Args)]
pub struct ToolsArgs {
    /// Print the full `tools/list` result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Executes the tools command.
pub fn execute(args: &ToolsArgs) -> anyhow::Result<()> {
    let catalog = ToolCatalog::standard();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&list_result(&catalog))?);
        return Ok(());
    }

    for tool in catalog.iter() {
        println!("{}", summary_line(tool));
    }
    Ok(())
}

/// One line per tool: name, helper, first line of the description.
fn summary_line(tool: &ToolDescriptor) -> String {
    let description = tool.description.lines().next().unwrap_or_default();
    format!(
        "{:<28} {:<12} {}",
        tool.name,
        tool.helper.to_string(),
        description
    )
}
