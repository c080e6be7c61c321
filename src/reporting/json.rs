// src/reporting/json.rs
//! Machine-readable report output.

use super::RankReport;
use anyhow::Result;

/// Prints the report as pretty JSON to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_report(report: &RankReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
