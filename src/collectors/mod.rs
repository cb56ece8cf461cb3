//! Listing collectors.
//!
//! A collector turns a search term into listings from one store. Collectors
//! may fail; `collect_all` contains those failures so one broken store never
//! costs the listings of the others.

pub mod catalog;
pub mod client;
pub mod profile;
pub mod scraper;

pub use catalog::{Offer, StaticCatalog};
pub use profile::{LinkStyle, StoreProfile};
pub use scraper::ScrapingCollector;

use crate::parser::schema::Listing;
use crate::utils::config::{DEFAULT_REQUEST_DELAY, DEFAULT_RESULTS_PER_STORE, DEFAULT_TIMEOUT};
use crate::utils::error::CollectError;
use log::{info, warn};
use std::time::Duration;

/// Supplier of listings for a search term
pub trait Collector {
    /// Store name used in logs
    fn store(&self) -> &str;

    fn search(&self, query: &str) -> Result<Vec<Listing>, CollectError>;
}

/// Settings shared by live collectors
#[derive(Debug, Clone)]
pub struct CollectorSettings {
    pub timeout: Duration,
    pub results_per_store: usize,
    pub request_delay: Duration,
}

impl Default for CollectorSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            results_per_store: DEFAULT_RESULTS_PER_STORE,
            request_delay: DEFAULT_REQUEST_DELAY,
        }
    }
}

/// Run a collector, turning failure into an empty result
pub fn search_or_empty(collector: &dyn Collector, query: &str) -> Vec<Listing> {
    match collector.search(query) {
        Ok(listings) => {
            info!("{}: {} listings", collector.store(), listings.len());
            listings
        }
        Err(e) => {
            warn!("{}: search failed, continuing without it: {}", collector.store(), e);
            Vec::new()
        }
    }
}

/// Search every collector in order and concatenate the listings
///
/// **Public** - the batch handed to `aggregator::compare`
pub fn collect_all(collectors: &[Box<dyn Collector>], query: &str) -> Vec<Listing> {
    collectors
        .iter()
        .flat_map(|collector| search_or_empty(collector.as_ref(), query))
        .collect()
}

/// Placeholder catalogs for Jumia, Marjane and other stores
pub fn demo_collectors() -> Vec<Box<dyn Collector>> {
    vec![
        Box::new(StaticCatalog::jumia_demo()),
        Box::new(StaticCatalog::marjane_demo()),
        Box::new(StaticCatalog::other_stores_demo()),
    ]
}

/// Scrapers for every store with a known page layout
pub fn live_collectors(settings: &CollectorSettings) -> Result<Vec<Box<dyn Collector>>, CollectError> {
    Ok(vec![
        Box::new(ScrapingCollector::new(StoreProfile::jumia(), settings)?),
        Box::new(ScrapingCollector::new(StoreProfile::marjane(), settings)?),
    ])
}
