//! Live collector that scrapes a store's search results page.

use super::client::StoreClient;
use super::profile::StoreProfile;
use super::{Collector, CollectorSettings};
use crate::parser::html::parse_listings;
use crate::parser::schema::Listing;
use crate::utils::error::CollectError;
use log::info;
use std::thread;
use std::time::Duration;

pub struct ScrapingCollector {
    profile: StoreProfile,
    client: StoreClient,
    limit: usize,
    request_delay: Duration,
}

impl ScrapingCollector {
    pub fn new(profile: StoreProfile, settings: &CollectorSettings) -> Result<Self, CollectError> {
        Ok(Self {
            profile,
            client: StoreClient::new(settings.timeout)?,
            limit: settings.results_per_store,
            request_delay: settings.request_delay,
        })
    }

    pub fn profile(&self) -> &StoreProfile {
        &self.profile
    }
}

impl Collector for ScrapingCollector {
    fn store(&self) -> &str {
        self.profile.name
    }

    fn search(&self, query: &str) -> Result<Vec<Listing>, CollectError> {
        let page = self
            .client
            .fetch_search_page(&self.profile.search_url(), query)?;

        let outcome = parse_listings(&page, &self.profile, self.limit)?;
        info!(
            "{}: parsed {} listings ({} cards skipped)",
            self.profile.name,
            outcome.listings.len(),
            outcome.skipped
        );

        if !self.request_delay.is_zero() {
            thread::sleep(self.request_delay);
        }

        Ok(outcome.listings)
    }
}
