//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "packwise")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Pack orders into the standard pack sizes")]
pub(crate) struct Cli {
    /// Configuration file; defaults to `PACKWISE_CONFIG`, then `server.*`
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Reject orders above this many items (overrides `packing.max_order`)
    #[arg(long, global = true)]
    pub max_order: Option<u64>,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pub pretty: bool,

    /// Log more (repeat for trace); logs go to stderr
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Greedy plan with small packs merged upwards
    Correct {
        /// Items ordered
        #[arg(allow_hyphen_values = true)]
        x: String,
    },
    /// Suboptimal single-size allocations, one per pack size
    Incorrect {
        /// Items ordered
        #[arg(allow_hyphen_values = true)]
        x: String,
    },
    /// Print the pack sizes, largest first
    Catalog {},
}
