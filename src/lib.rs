//! Price Scout
//!
//! Collects product listings from Moroccan e-commerce sites, orders them
//! from cheapest to most expensive and summarizes the savings.
//!
//! This crate provides the core implementation for the
//! `price-scout` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! price-scout search "wireless headphones"
//! price-scout search "wireless headphones" --live --save-dir results/
//! ```

pub mod aggregator;
pub mod collectors;
pub mod commands;
pub mod output;
pub mod parser;
pub mod tools;
pub mod utils;

pub use aggregator::{compare, ComparisonResult};
pub use parser::schema::{Availability, Listing, Savings, SearchReport};
