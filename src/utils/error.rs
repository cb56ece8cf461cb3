//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors raised when a listing fails validation at construction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ListingError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),
}

/// Errors that can occur while collecting listings from a store
#[derive(Error, Debug)]
pub enum CollectError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid store response: {0}")]
    InvalidResponse(String),

    #[error("Invalid CSS selector: {0}")]
    InvalidSelector(String),

    #[error("Invalid listing: {0}")]
    InvalidListing(#[from] ListingError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors returned by the tool dispatcher
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Missing argument '{argument}' for tool {tool}")]
    MissingArgument { tool: String, argument: String },

    #[error("Invalid arguments for tool {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },

    #[error(transparent)]
    Output(#[from] OutputError),
}
