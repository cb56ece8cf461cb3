//! Listing model and the JSON documents we read and write.
//!
//! A `Listing` can only be built through validation, both from code
//! (`Listing::new`) and from JSON (`serde(try_from)`), so everything
//! downstream of a collector works with well-formed prices.

use crate::utils::config::DEFAULT_CURRENCY;
use crate::utils::error::ListingError;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One product offer from one store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawListing")]
pub struct Listing {
    name: String,
    price: f64,
    currency: String,
    store: String,
    availability: Availability,
    url: String,
}

impl Listing {
    /// Build a validated listing
    ///
    /// # Errors
    /// * `ListingError::MissingField` - name, currency or store is blank
    /// * `ListingError::InvalidPrice` - price is negative, NaN or infinite
    pub fn new(
        name: impl Into<String>,
        price: f64,
        currency: impl Into<String>,
        store: impl Into<String>,
        availability: Availability,
        url: impl Into<String>,
    ) -> Result<Self, ListingError> {
        let name = required("name", name.into())?;
        let currency = required("currency", currency.into())?;
        let store = required("store", store.into())?;

        if !price.is_finite() || price < 0.0 {
            return Err(ListingError::InvalidPrice(price.to_string()));
        }

        Ok(Self {
            name,
            // Folds -0.0 into 0.0 so equal prices compare equal when sorting.
            price: price + 0.0,
            currency,
            store,
            availability,
            url: url.into().trim().to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn store(&self) -> &str {
        &self.store
    }

    pub fn availability(&self) -> &Availability {
        &self.availability
    }

    /// Source page of the listing (empty when the store gave none)
    pub fn url(&self) -> &str {
        &self.url
    }
}

fn required(field: &'static str, value: String) -> Result<String, ListingError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ListingError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Wire shape of a listing before validation
#[derive(Debug, Deserialize)]
struct RawListing {
    name: Option<String>,
    price: Option<f64>,
    #[serde(default)]
    currency: Option<String>,
    store: Option<String>,
    #[serde(default)]
    availability: Option<Availability>,
    #[serde(default)]
    url: Option<String>,
}

impl TryFrom<RawListing> for Listing {
    type Error = ListingError;

    fn try_from(raw: RawListing) -> Result<Self, Self::Error> {
        let price = raw.price.ok_or(ListingError::MissingField("price"))?;

        Listing::new(
            raw.name.ok_or(ListingError::MissingField("name"))?,
            price,
            raw.currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            raw.store.ok_or(ListingError::MissingField("store"))?,
            raw.availability.unwrap_or(Availability::CheckStore),
            raw.url.unwrap_or_default(),
        )
    }
}

/// Stock status as the stores label it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Availability {
    InStock,
    LimitedStock,
    OutOfStock,
    /// Store page did not expose a status
    CheckStore,
    Other(String),
}

impl Availability {
    pub fn label(&self) -> &str {
        match self {
            Availability::InStock => "In Stock",
            Availability::LimitedStock => "Limited Stock",
            Availability::OutOfStock => "Out of Stock",
            Availability::CheckStore => "Check Store",
            Availability::Other(label) => label,
        }
    }
}

impl From<String> for Availability {
    fn from(label: String) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "in stock" => Availability::InStock,
            "limited stock" => Availability::LimitedStock,
            "out of stock" => Availability::OutOfStock,
            "check store" | "" => Availability::CheckStore,
            _ => Availability::Other(label.trim().to_string()),
        }
    }
}

impl From<&str> for Availability {
    fn from(label: &str) -> Self {
        Availability::from(label.to_string())
    }
}

impl From<Availability> for String {
    fn from(availability: Availability) -> Self {
        availability.label().to_string()
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Savings from picking the cheapest listing over the most expensive one
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Savings {
    /// Most expensive price minus cheapest price
    pub amount: f64,

    /// `amount` as a percentage of the most expensive price
    pub percentage: f64,

    pub cheapest_price: f64,
    pub most_expensive_price: f64,
}

/// Persisted result of one search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    pub search_query: String,

    /// RFC 3339 timestamp (UTC) of when the report was produced
    pub timestamp: String,

    pub total_results: usize,

    /// Listings ordered cheapest first
    pub products: Vec<Listing>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings: Option<Savings>,
}

impl SearchReport {
    pub fn new(
        search_query: impl Into<String>,
        products: Vec<Listing>,
        savings: Option<Savings>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            search_query: search_query.into(),
            timestamp: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            total_results: products.len(),
            products,
            savings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative_price() {
        let result = Listing::new("Phone", -1.0, "MAD", "Jumia", Availability::InStock, "");
        assert!(matches!(result, Err(ListingError::InvalidPrice(_))));
    }

    #[test]
    fn test_new_rejects_nan_price() {
        let result = Listing::new("Phone", f64::NAN, "MAD", "Jumia", Availability::InStock, "");
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_blank_name() {
        let result = Listing::new("   ", 10.0, "MAD", "Jumia", Availability::InStock, "");
        assert_eq!(result, Err(ListingError::MissingField("name")));
    }

    #[test]
    fn test_zero_price_is_valid() {
        let listing = Listing::new("Sample", 0.0, "MAD", "Jumia", Availability::InStock, "").unwrap();
        assert_eq!(listing.price(), 0.0);
    }

    #[test]
    fn test_negative_zero_price_is_stored_as_zero() {
        let listing = Listing::new("Sample", -0.0, "MAD", "Jumia", Availability::InStock, "").unwrap();
        assert!(listing.price().is_sign_positive());

        let listing: Listing =
            serde_json::from_str(r#"{"name": "Sample", "price": -0.0, "store": "Jumia"}"#).unwrap();
        assert!(listing.price().is_sign_positive());
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let listing: Listing =
            serde_json::from_str(r#"{"name": "Kettle", "price": 199.5, "store": "Marjane"}"#).unwrap();

        assert_eq!(listing.currency(), "MAD");
        assert_eq!(listing.availability(), &Availability::CheckStore);
        assert_eq!(listing.url(), "");
    }

    #[test]
    fn test_deserialize_missing_price_is_rejected() {
        let result: Result<Listing, _> =
            serde_json::from_str(r#"{"name": "Kettle", "store": "Marjane"}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("price"), "unexpected error: {}", err);
    }

    #[test]
    fn test_availability_labels() {
        assert_eq!(Availability::from("In Stock"), Availability::InStock);
        assert_eq!(Availability::from("limited stock"), Availability::LimitedStock);
        assert_eq!(
            Availability::from("Ships in 3 days"),
            Availability::Other("Ships in 3 days".to_string())
        );
        assert_eq!(String::from(Availability::OutOfStock), "Out of Stock");
    }

    #[test]
    fn test_report_counts_products() {
        let listing = Listing::new("Fan", 120.0, "MAD", "Jumia", Availability::InStock, "").unwrap();
        let report = SearchReport::new("fan", vec![listing], None, Utc::now());
        assert_eq!(report.total_results, 1);
        assert!(report.timestamp.ends_with('Z'));
    }
}
