//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod search;
pub mod utils;

// Re-export main command functions
pub use models::{SearchArgs, Source};
pub use search::{execute_search, validate_args, validate_settings};
pub use utils::{call_tool, compare_listings_file, display_tools, display_version, validate_report_file};
