//! Interaction command handlers (toggle, expand, clear)

use anyhow::{Context, Result};

use hierslice::application::{Interaction, InteractionOutcome, SlicerSession};
use hierslice::config::Settings;
use hierslice::domain::services::FilterBuilder;
use hierslice::presentation::{Cli, OutputFormat};

use super::{print_filter, print_tree, Workspace};

pub fn cmd_toggle(cli: &Cli, settings: &Settings, ids: &[String], format: OutputFormat) -> Result<()> {
    let mut ws = Workspace::open(cli)?;

    let last = {
        let mut session = SlicerSession::new(&mut ws.tree, settings, &mut ws.store);
        let mut last = None;
        for id in ids {
            let outcome = session
                .handle(Interaction::Toggle(id.clone()))
                .with_context(|| format!("failed to toggle '{}'", id))?;
            if let InteractionOutcome::SelectionChanged(filter) = outcome {
                last = Some(filter);
            }
        }
        last
    };

    // Every toggle was ignored; report the filter that is still in place
    let outcome = match last {
        Some(outcome) => outcome,
        None => FilterBuilder::build(&ws.tree)?,
    };
    print_filter("toggle", &ws.tree, &outcome, format)
}

pub fn cmd_expand(cli: &Cli, settings: &Settings, ids: &[String], format: OutputFormat) -> Result<()> {
    let mut ws = Workspace::open(cli)?;
    {
        let mut session = SlicerSession::new(&mut ws.tree, settings, &mut ws.store);
        for id in ids {
            session
                .handle(Interaction::ToggleExpand(id.clone()))
                .with_context(|| format!("failed to expand '{}'", id))?;
        }
    }
    print_tree("expand", &ws.tree, true, format)
}

pub fn cmd_expand_all(
    cli: &Cli,
    settings: &Settings,
    expand: bool,
    format: OutputFormat,
) -> Result<()> {
    let mut ws = Workspace::open(cli)?;
    let (interaction, command) = if expand {
        (Interaction::ExpandAll, "expand-all")
    } else {
        (Interaction::CollapseAll, "collapse-all")
    };

    let outcome = SlicerSession::new(&mut ws.tree, settings, &mut ws.store).handle(interaction)?;
    let changed = outcome == InteractionOutcome::ExpandChanged;
    print_tree(command, &ws.tree, changed, format)
}

pub fn cmd_clear(cli: &Cli, settings: &Settings, format: OutputFormat) -> Result<()> {
    let mut ws = Workspace::open(cli)?;
    let outcome = SlicerSession::new(&mut ws.tree, settings, &mut ws.store).handle(Interaction::Clear)?;

    let filter = match outcome {
        InteractionOutcome::SelectionChanged(filter) => filter,
        _ => FilterBuilder::build(&ws.tree)?,
    };
    print_filter("clear", &ws.tree, &filter, format)
}
