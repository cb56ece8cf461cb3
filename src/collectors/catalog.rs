//! Fixed-offer collector used for demos and tests.
//!
//! The built-in catalogs return the same placeholder offers for any query,
//! named after the query. They stand in for stores that have no scraper yet.

use super::Collector;
use crate::parser::schema::{Availability, Listing};
use crate::utils::config::DEFAULT_CURRENCY;
use crate::utils::error::CollectError;

/// One fixed offer; the listing name is `"<query> - <label>"`
#[derive(Debug, Clone)]
pub struct Offer {
    pub label: String,
    pub price: f64,
    pub availability: Availability,
    pub url: String,
}

impl Offer {
    pub fn new(
        label: impl Into<String>,
        price: f64,
        availability: Availability,
        url: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            price,
            availability,
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StaticCatalog {
    store: String,
    offers: Vec<Offer>,
}

impl StaticCatalog {
    pub fn new(store: impl Into<String>, offers: Vec<Offer>) -> Self {
        Self {
            store: store.into(),
            offers,
        }
    }

    pub fn jumia_demo() -> Self {
        Self::new(
            "Jumia Morocco",
            vec![
                Offer::new("Model A", 450.0, Availability::InStock, "https://www.jumia.ma/example1"),
                Offer::new("Model B", 350.0, Availability::InStock, "https://www.jumia.ma/example2"),
            ],
        )
    }

    pub fn marjane_demo() -> Self {
        Self::new(
            "Marjane",
            vec![
                Offer::new(
                    "Marjane Brand",
                    380.0,
                    Availability::InStock,
                    "https://www.marjane.ma/example1",
                ),
                Offer::new(
                    "Premium",
                    520.0,
                    Availability::LimitedStock,
                    "https://www.marjane.ma/example2",
                ),
            ],
        )
    }

    pub fn other_stores_demo() -> Self {
        Self::new(
            "Electroplanet",
            vec![Offer::new(
                "Store Brand",
                420.0,
                Availability::InStock,
                "https://example.com/product",
            )],
        )
    }
}

impl Collector for StaticCatalog {
    fn store(&self) -> &str {
        &self.store
    }

    fn search(&self, query: &str) -> Result<Vec<Listing>, CollectError> {
        let query = query.trim();
        self.offers
            .iter()
            .map(|offer| {
                Listing::new(
                    format!("{} - {}", query, offer.label),
                    offer.price,
                    DEFAULT_CURRENCY,
                    self.store.as_str(),
                    offer.availability.clone(),
                    offer.url.as_str(),
                )
                .map_err(CollectError::from)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_names_follow_query() {
        let listings = StaticCatalog::jumia_demo().search("laptop").unwrap();

        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].name(), "laptop - Model A");
        assert_eq!(listings[0].store(), "Jumia Morocco");
        assert_eq!(listings[1].price(), 350.0);
    }

    #[test]
    fn test_invalid_offer_is_an_error() {
        let catalog = StaticCatalog::new(
            "Broken",
            vec![Offer::new("Bad", -5.0, Availability::InStock, "")],
        );
        assert!(matches!(
            catalog.search("x"),
            Err(CollectError::InvalidListing(_))
        ));
    }
}
