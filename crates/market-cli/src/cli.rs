//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Market Config - Resolve market presentation configuration
#[derive(Parser, Debug)]
#[command(name = "market")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding one record file per market
    #[arg(long, global = true, env = "MARKET_STORE", default_value = "markets")]
    pub store: PathBuf,

    /// Directory containing market.toml settings
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve a market by code and print the response envelope
    ///
    /// Exits 0 on success, 2 when no market has the code and 1 on any
    /// other failure.
    ///
    /// Examples:
    ///   market resolve MY
    ///   market resolve sg --compact
    Resolve {
        /// Market code (case-insensitive)
        code: String,

        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// List markets in the store
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Lint all markets for reuse problems
    ///
    /// Exits 1 when any error-level issue is found.
    Check {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Write the Malaysia, Singapore and Australia sample markets
    Seed {
        /// Overwrite existing record files
        #[arg(long)]
        force: bool,
    },
}
