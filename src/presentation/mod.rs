//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command-line interface definition
//! - `output` - Tree and filter rendering

pub mod cli;
pub mod output;

pub use cli::{Cli, Commands};
pub use output::OutputFormat;
