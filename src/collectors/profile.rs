//! Per-store description of the search page and its markup.

use crate::utils::config::{JUMIA_BASE_URL, MARJANE_BASE_URL};

/// How `href` values on a store's result cards are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    /// Site-relative paths, joined to the base URL
    Relative,
    /// Used as found
    Absolute,
}

/// Where a store searches and which selectors read its result cards
#[derive(Debug, Clone)]
pub struct StoreProfile {
    /// Store name stamped on every listing
    pub name: &'static str,
    pub base_url: String,
    /// Path of the search endpoint; the query goes in `?q=`
    pub search_path: &'static str,
    pub card_selector: &'static str,
    pub name_selector: &'static str,
    pub price_selector: &'static str,
    pub link_selector: &'static str,
    pub link_style: LinkStyle,
}

impl StoreProfile {
    pub fn jumia() -> Self {
        Self {
            name: "Jumia",
            base_url: JUMIA_BASE_URL.to_string(),
            search_path: "/catalog/",
            card_selector: "article.prd",
            name_selector: "h3.name",
            price_selector: "div.prc",
            link_selector: "a.core",
            link_style: LinkStyle::Relative,
        }
    }

    pub fn marjane() -> Self {
        Self {
            name: "Marjane",
            base_url: MARJANE_BASE_URL.to_string(),
            search_path: "/search",
            card_selector: "div.product-item",
            name_selector: "div.product-name",
            price_selector: "span.price",
            link_selector: "a",
            link_style: LinkStyle::Absolute,
        }
    }

    /// Point the profile at another host (mirrors, test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn search_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.search_path)
    }
}
