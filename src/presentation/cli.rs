//! CLI Argument Parsing
//!
//! Global flags (--nodes, --state, --config, --json, --verbose) are
//! inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Hierslice - hierarchical slicer over a flat node list
#[derive(Parser, Debug)]
#[command(name = "hierslice")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Node list (JSON array of nodes)
    #[arg(long, global = true, value_name = "FILE", default_value = "nodes.json")]
    pub nodes: PathBuf,

    /// State file holding persisted selection, expand state and filter.
    /// Writes lock a sibling `<name>.lock` file, which is left in place.
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        default_value = "hierslice.state.json"
    )]
    pub state: PathBuf,

    /// Settings file (overrides ./hierslice.toml and the user config)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Allow only one selected path at a time
    #[arg(long, global = true, conflicts_with = "multi_select")]
    pub single_select: bool,

    /// Toggle nodes independently (default)
    #[arg(long, global = true)]
    pub multi_select: bool,

    /// Output format for scripts
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Selection mode forced on the command line, if any
    pub fn single_select_override(&self) -> Option<bool> {
        if self.single_select {
            Some(true)
        } else if self.multi_select {
            Some(false)
        } else {
            None
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Toggle the selection of one or more nodes, in order
    Toggle {
        /// Node ids (ownId)
        #[arg(required = true, value_name = "ID")]
        ids: Vec<String>,
    },

    /// Toggle the expand state of one or more nodes
    Expand {
        /// Node ids (ownId)
        #[arg(required = true, value_name = "ID")]
        ids: Vec<String>,
    },

    /// Expand every branch
    ExpandAll,

    /// Collapse every branch
    CollapseAll,

    /// Clear the selection and remove the filter
    Clear,

    /// Print the filter for the current selection
    Filter,

    /// Print the visible tree
    Show,
}
