//! Scan command implementation.

use super::load;
use crate::cli::ScanArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use factdesk_domain::{Claim, StoryStore};
use factdesk_review::{RedFlagScanner, ScanConfig};
use std::fs;
use tracing::info;

/// Execute the scan command.
///
/// Claims come from `--input` (a JSON list) when given, otherwise from the
/// workspace. Scanning never changes anything.
pub fn execute_scan<S>(
    args: ScanArgs,
    store: &S,
    scan_config: &ScanConfig,
    formatter: &Formatter,
) -> Result<String>
where
    S: StoryStore,
    CliError: From<S::Error>,
{
    let claims: Vec<Claim> = match &args.input {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => load(store)?.claims().to_vec(),
    };

    let scanner = RedFlagScanner::new(scan_config.clone());
    let report = scanner.scan(&claims);
    info!(
        claims = claims.len(),
        flags = report.len(),
        "Scanned claims for red flags"
    );

    formatter.format_scan(&report)
}
