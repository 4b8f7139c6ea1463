//! Command handlers

mod interact;
mod query;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use hierslice::config::Settings;
use hierslice::domain::entities::NodeTree;
use hierslice::domain::services::StateSerializer;
use hierslice::domain::value_objects::{FilterOutcome, PropertyId};
use hierslice::infrastructure::{JsonNodeRepository, JsonStateStore};
use hierslice::presentation::output::{self, OutputFormat};
use hierslice::presentation::{Cli, Commands};

pub fn run(cli: &Cli) -> Result<()> {
    let settings = resolve_settings(cli)?;
    let format = OutputFormat::from_json_flag(cli.json);
    debug!(mode = %settings.selection_mode(), "resolved settings");

    match &cli.command {
        Commands::Toggle { ids } => interact::cmd_toggle(cli, &settings, ids, format),
        Commands::Expand { ids } => interact::cmd_expand(cli, &settings, ids, format),
        Commands::ExpandAll => interact::cmd_expand_all(cli, &settings, true, format),
        Commands::CollapseAll => interact::cmd_expand_all(cli, &settings, false, format),
        Commands::Clear => interact::cmd_clear(cli, &settings, format),
        Commands::Filter => query::cmd_filter(cli, format),
        Commands::Show => query::cmd_show(cli, format),
    }
}

/// CLI flags > environment > --config > project file > user file > defaults
fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => {
            let (settings, warnings) = Settings::load_with_warnings(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            for w in &warnings {
                warn!("{}", w);
            }
            settings.with_env_overrides()
        }
        None => {
            let project_root = std::env::current_dir()?;
            Settings::load_or_default(Some(&project_root))
        }
    };

    if let Some(single) = cli.single_select_override() {
        settings.selection.single_select = single;
    }
    Ok(settings)
}

/// Node list with persisted state restored onto it
pub struct Workspace {
    pub tree: NodeTree,
    pub store: JsonStateStore,
}

impl Workspace {
    pub fn open(cli: &Cli) -> Result<Self> {
        let mut tree = JsonNodeRepository::new(&cli.nodes)
            .load()
            .with_context(|| format!("failed to load node list {}", cli.nodes.display()))?;
        let store = JsonStateStore::open(&cli.state)
            .with_context(|| format!("failed to open state file {}", cli.state.display()))?;

        // Flags from the node list stand until the state file has an opinion
        if store.property(PropertyId::SELECTED).is_some() {
            StateSerializer::restore_selection(&mut tree, store.selected_keys());
        }
        if store.property(PropertyId::EXPANDED).is_some() {
            StateSerializer::restore_expanded(&mut tree, store.expanded_keys());
        }

        Ok(Self { tree, store })
    }
}

fn print_filter(
    command: &str,
    tree: &NodeTree,
    outcome: &FilterOutcome,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let out = output::filter_json(command, tree, outcome);
            println!("{}", serde_json::to_string(&out)?);
        }
        OutputFormat::Text => {
            println!("{}", output::render_status_line(tree));
            println!("{}", output::render_filter(outcome)?);
        }
    }
    Ok(())
}

fn print_tree(command: &str, tree: &NodeTree, changed: bool, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let out = output::expand_json(command, tree, changed);
            println!("{}", serde_json::to_string(&out)?);
        }
        OutputFormat::Text => {
            if !changed {
                println!("Nothing to change");
            }
            print!("{}", output::render_tree(tree));
        }
    }
    Ok(())
}
