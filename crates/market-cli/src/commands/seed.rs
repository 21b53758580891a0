//! Seed command: write the sample markets into the store directory

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use chrono::Utc;
use colored::Colorize;
use market_meta::{MarketId, SampleIds, sample_markets};
use market_store::DirectoryStore;
use uuid::Uuid;

use crate::error::{CliError, Result};

fn fresh_ids() -> SampleIds {
    let id = || MarketId::new(Uuid::new_v4().to_string());
    SampleIds {
        malaysia: id(),
        singapore: id(),
        australia: id(),
    }
}

/// Run the seed command
///
/// Refuses to overwrite existing record files unless `force` is set.
pub fn run_seed(store: &Path, force: bool) -> Result<ExitCode> {
    fs::create_dir_all(store)?;
    let directory = DirectoryStore::new(store);

    let now = Utc::now();
    let mut records = sample_markets(&fresh_ids());
    for record in &mut records {
        record.created_at = Some(now);
        record.updated_at = Some(now);
    }

    if !force {
        if let Some(existing) = records
            .iter()
            .map(|r| directory.path_for(r))
            .find(|path| path.exists())
        {
            return Err(CliError::user(format!(
                "{} already exists. Use --force to overwrite.",
                existing.display()
            )));
        }
    }

    for record in &records {
        let path = directory.put(record)?;
        println!(
            "{} {} ({}) -> {}",
            "Seeded".green().bold(),
            record.name,
            record.code,
            path.display()
        );
    }

    Ok(ExitCode::SUCCESS)
}
