//! Check command: governance lints over every market in the store

use std::path::Path;
use std::process::ExitCode;

use colored::Colorize;
use market_core::{WarnLevel, has_errors, lint_markets};
use market_store::{DirectoryStore, MarketRecordStore};

use super::load_settings;
use crate::error::Result;

/// Run the check command
pub async fn run_check(store: &Path, root: &Path, json: bool) -> Result<ExitCode> {
    let settings = load_settings(root)?;
    let records = DirectoryStore::new(store).all().await?;
    let warnings = lint_markets(&records, settings.max_depth);
    let status = if has_errors(&warnings) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    };

    if json {
        let output = serde_json::to_string_pretty(&warnings)?;
        println!("{}", output);
        return Ok(status);
    }

    if warnings.is_empty() {
        println!(
            "{} {} markets checked, no issues.",
            "OK".green().bold(),
            records.len()
        );
        return Ok(status);
    }

    println!("{} Found {} issue(s):", "=>".blue().bold(), warnings.len());
    for w in &warnings {
        let prefix = match w.level {
            WarnLevel::Info => "info".cyan(),
            WarnLevel::Warning => "warn".yellow(),
            WarnLevel::Error => "error".red(),
        };
        match (&w.market, w.section) {
            (Some(market), Some(section)) => println!(
                "  [{}] {} {}: {}",
                prefix,
                market.as_str().bold(),
                section,
                w.message
            ),
            _ => println!("  [{}] {}", prefix, w.message),
        }
    }

    Ok(status)
}
