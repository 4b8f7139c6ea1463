//! Hierslice CLI - drive the slicer engine from the command line
//!
//! Usage: hierslice [OPTIONS] <COMMAND>
//!
//! Commands:
//!   toggle        Toggle the selection of one or more nodes
//!   expand        Toggle the expand state of one or more nodes
//!   expand-all    Expand every branch
//!   collapse-all  Collapse every branch
//!   clear         Clear the selection and remove the filter
//!   filter        Print the filter for the current selection
//!   show          Print the visible tree

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hierslice::presentation::Cli;

/// Environment variable holding a log filter directive
const LOG_ENV: &str = "HIERSLICE_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    commands::run(&cli)
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
