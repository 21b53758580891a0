//! Market Config CLI
//!
//! Resolves market presentation configuration from a directory of market
//! records.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Control log verbosity (default: `info` for the market
//!   crates, `debug` with `--verbose`)
//! - `MARKET_STORE`: Default for `--store`
//!
//! Logs go to stderr so stdout stays machine readable.

mod cli;
mod commands;
mod error;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::Result;

const LOG_TARGETS: [&str; 4] = ["market_cli", "market_core", "market_store", "market_meta"];

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let Some(command) = cli.command else {
        println!("{} Market Config CLI", "market".green().bold());
        println!();
        println!("Run {} for available commands.", "market --help".cyan());
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Resolve { code, compact } => {
            commands::run_resolve(&cli.store, &cli.root, &code, compact).await
        }
        Commands::List { json } => commands::run_list(&cli.store, json).await,
        Commands::Check { json } => commands::run_check(&cli.store, &cli.root, json).await,
        Commands::Seed { force } => commands::run_seed(&cli.store, force),
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let mut filter = EnvFilter::from_default_env();
    for target in LOG_TARGETS {
        filter = filter.add_directive(format!("{target}={level}").parse()?);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("Verbose mode enabled");
    Ok(())
}
