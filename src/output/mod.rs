//! Output writers for comparison results.
//!
//! This module handles:
//! - JSON search reports (write, read, file naming)
//! - Text rendering of a comparison

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, report_file_name, write_report};
pub use text::render_comparison;

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
