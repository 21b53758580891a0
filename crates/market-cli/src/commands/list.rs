//! List command

use std::path::Path;
use std::process::ExitCode;

use colored::Colorize;
use market_store::{DirectoryStore, MarketRecordStore};

use crate::error::Result;

/// Run the list command
pub async fn run_list(store: &Path, json: bool) -> Result<ExitCode> {
    let summaries = DirectoryStore::new(store).list().await?;

    if json {
        let output = serde_json::to_string_pretty(&summaries)?;
        println!("{}", output);
        return Ok(ExitCode::SUCCESS);
    }

    if summaries.is_empty() {
        println!(
            "No markets in {}. Run {} to add sample markets.",
            store.display(),
            "market seed".cyan()
        );
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Markets".bold());
    println!();
    for summary in &summaries {
        let marker = if summary.is_default {
            " (default)".yellow().to_string()
        } else {
            String::new()
        };
        let updated = summary
            .updated_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!(
            "  {:<8} {:<24} {}{}",
            summary.code.as_str().green(),
            summary.name,
            updated.dimmed(),
            marker
        );
    }
    println!();
    println!("{} {} markets.", "Total:".dimmed(), summaries.len());

    Ok(ExitCode::SUCCESS)
}
