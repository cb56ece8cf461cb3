//! JSON search report writer.
//!
//! Writes SearchReport structs to JSON files with proper formatting.

use super::validate_path;
use crate::parser::schema::SearchReport;
use crate::utils::config::REPORT_FILE_PREFIX;
use crate::utils::error::OutputError;
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a search report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(report: &SearchReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    validate_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report).map_err(OutputError::SerializationFailed)?;

    info!(
        "Report written successfully ({} listings)",
        report.total_results
    );

    Ok(())
}

/// Read a search report from a JSON file
///
/// Listings are re-validated on the way in.
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error or invalid listing
pub fn read_report(input_path: impl AsRef<Path>) -> Result<SearchReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;

    let report: SearchReport =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Report loaded: query '{}', {} listings",
        report.search_query, report.total_results
    );

    Ok(report)
}

/// File name for a saved report: `results_<query>_<YYYYmmdd_HHMMSS>.json`
pub fn report_file_name(query: &str, generated_at: DateTime<Utc>) -> String {
    let query: String = query
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() || c == '/' || c == '\\' { '_' } else { c })
        .collect();

    format!(
        "{}_{}_{}.json",
        REPORT_FILE_PREFIX,
        query,
        generated_at.format("%Y%m%d_%H%M%S")
    )
}
