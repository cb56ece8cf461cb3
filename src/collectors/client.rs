//! HTTP client for fetching store search pages.

use crate::utils::config::USER_AGENT;
use crate::utils::error::CollectError;
use log::{debug, info};
use reqwest::blocking::Client;
use std::time::Duration;

/// Blocking client with a browser User-Agent and a request timeout
pub struct StoreClient {
    client: Client,
}

impl StoreClient {
    /// Create a new store client
    pub fn new(timeout: Duration) -> Result<Self, CollectError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(CollectError::RequestFailed)?;

        Ok(Self { client })
    }

    /// Fetch `url?q=<query>` and return the page body
    ///
    /// # Errors
    /// * `CollectError::RequestFailed` - connection, timeout or body read failure
    /// * `CollectError::InvalidResponse` - non-success HTTP status
    pub fn fetch_search_page(&self, url: &str, query: &str) -> Result<String, CollectError> {
        info!("Fetching {} (q={})", url, query);

        let response = self
            .client
            .get(url)
            .query(&[("q", query)])
            .send()
            .map_err(CollectError::RequestFailed)?;

        let status = response.status();
        debug!("{} responded with {}", url, status);

        if !status.is_success() {
            return Err(CollectError::InvalidResponse(format!(
                "HTTP {} from {}",
                status, url
            )));
        }

        response.text().map_err(CollectError::RequestFailed)
    }
}
