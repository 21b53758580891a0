//! Resolve command

use std::path::Path;
use std::process::ExitCode;

use market_core::{ConfigResolver, MarketResponse};
use market_store::DirectoryStore;

use super::load_settings;
use crate::error::Result;

/// Exit status for a market code with no record.
const EXIT_NOT_FOUND: u8 = 2;

/// Run the resolve command
///
/// Prints the response envelope on stdout whatever the outcome, so callers
/// can forward it as-is.
pub async fn run_resolve(store: &Path, root: &Path, code: &str, compact: bool) -> Result<ExitCode> {
    let settings = load_settings(root)?;
    let resolver = ConfigResolver::with_settings(DirectoryStore::new(store), settings);

    let response = MarketResponse::from_result(resolver.resolve_code(code).await);
    let output = if compact {
        response.to_json()?
    } else {
        response.to_json_pretty()?
    };
    println!("{}", output);

    Ok(exit_code(response.status))
}

fn exit_code(status: u16) -> ExitCode {
    match status {
        200 => ExitCode::SUCCESS,
        404 => ExitCode::from(EXIT_NOT_FOUND),
        _ => ExitCode::FAILURE,
    }
}
