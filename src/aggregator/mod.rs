//! Price aggregation over collected listings.
//!
//! This module turns an unordered batch of listings into:
//! - A stable cheapest-to-most-expensive ordering
//! - A savings summary comparing the two extremes

pub mod compare;
pub mod metrics;

// Re-export main types and functions
pub use compare::{compare, ComparisonResult};
pub use metrics::calculate_savings;
