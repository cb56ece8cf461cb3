//! Listing model and store page parsing.
//!
//! This module handles:
//! - The validated `Listing` value and persisted report schema
//! - Turning price text into numbers
//! - Extracting listings from search result pages

pub mod html;
pub mod price;
pub mod schema;

// Re-export main types
pub use html::{parse_listings, ParseOutcome};
pub use price::extract_price;
pub use schema::{Availability, Listing, Savings, SearchReport};
