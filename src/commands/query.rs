//! Read-only command handlers (filter, show)

use anyhow::Result;

use hierslice::domain::services::FilterBuilder;
use hierslice::presentation::output::{self, OutputFormat};
use hierslice::presentation::Cli;

use super::{print_filter, Workspace};

pub fn cmd_filter(cli: &Cli, format: OutputFormat) -> Result<()> {
    let ws = Workspace::open(cli)?;
    let outcome = FilterBuilder::build(&ws.tree)?;
    print_filter("filter", &ws.tree, &outcome, format)
}

pub fn cmd_show(cli: &Cli, format: OutputFormat) -> Result<()> {
    let ws = Workspace::open(cli)?;
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&output::tree_json(&ws.tree))?);
        }
        OutputFormat::Text => {
            println!("{}", output::render_status_line(&ws.tree));
            print!("{}", output::render_tree(&ws.tree));
        }
    }
    Ok(())
}
