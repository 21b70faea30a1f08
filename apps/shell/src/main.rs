#![allow(clippy::print_stdout)]

mod args;

use crate::args::{Cli, Command};
use anyhow::{Context, Result};
use clap::Parser;
use packwise::domain::config::ApiConfig;
use packwise::features::packing::Packing;
use packwise::kernel::config::load_config;
use packwise_logger::{LevelFilter, Logger};
use serde::Serialize;

#[packwise_runtime::main(memory_efficient)]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let _logger = Logger::builder().name(env!("CARGO_PKG_NAME")).stderr(true).level(level).init()?;

    let mut cfg: ApiConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    if let Some(max_order) = cli.max_order {
        cfg.packing.max_order = max_order;
    }

    let packing = Packing::from_config(&cfg.packing)?;

    match &cli.command {
        Command::Correct { x } => print(&packing.correct(Some(x.as_str()))?, cli.pretty),
        Command::Incorrect { x } => print(&packing.incorrect(Some(x.as_str()))?, cli.pretty),
        Command::Catalog {} => print(&packing.catalog, cli.pretty),
    }
}

fn print<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json =
        if pretty { serde_json::to_string_pretty(value)? } else { serde_json::to_string(value)? };
    println!("{json}");
    Ok(())
}
