//! Ordering listings by price.

use super::metrics::calculate_savings;
use crate::parser::schema::{Listing, Savings};
use log::debug;
use serde::Serialize;

/// Listings ordered cheapest first, with savings when two or more exist
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    ordered: Vec<Listing>,
    savings: Option<Savings>,
}

impl ComparisonResult {
    pub fn ordered(&self) -> &[Listing] {
        &self.ordered
    }

    pub fn into_ordered(self) -> Vec<Listing> {
        self.ordered
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// `None` unless at least two listings were compared
    pub fn cheapest(&self) -> Option<&Listing> {
        self.savings.and(self.ordered.first())
    }

    /// `None` unless at least two listings were compared
    pub fn most_expensive(&self) -> Option<&Listing> {
        self.savings.and(self.ordered.last())
    }

    pub fn savings(&self) -> Option<&Savings> {
        self.savings.as_ref()
    }
}

/// Sort listings by ascending price and summarize the savings
///
/// **Public** - main entry point for aggregation
///
/// The sort is stable: listings with equal prices keep their input order.
/// Zero or one listing yields a result without savings.
///
/// # Example
/// ```ignore
/// let result = compare(collect_all(&collectors, "laptop"));
/// if let Some(savings) = result.savings() {
///     println!("{}", savings.summary());
/// }
/// ```
pub fn compare(listings: Vec<Listing>) -> ComparisonResult {
    let mut ordered = listings;
    // Prices are finite and never -0.0, so total_cmp matches numeric order.
    ordered.sort_by(|a, b| a.price().total_cmp(&b.price()));

    let savings = match (ordered.first(), ordered.last()) {
        (Some(cheapest), Some(most_expensive)) if ordered.len() >= 2 => {
            Some(calculate_savings(cheapest, most_expensive))
        }
        _ => None,
    };

    debug!(
        "Compared {} listings, savings {}",
        ordered.len(),
        savings.map_or_else(|| "n/a".to_string(), |s| s.summary())
    );

    ComparisonResult { ordered, savings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::Availability;

    fn listing(name: &str, price: f64) -> Listing {
        Listing::new(name, price, "MAD", "Test Store", Availability::InStock, "").unwrap()
    }

    #[test]
    fn test_compare_orders_by_price() {
        let result = compare(vec![
            listing("a", 450.0),
            listing("b", 350.0),
            listing("c", 520.0),
            listing("d", 380.0),
        ]);

        let prices: Vec<f64> = result.ordered().iter().map(Listing::price).collect();
        assert_eq!(prices, vec![350.0, 380.0, 450.0, 520.0]);

        let savings = result.savings().unwrap();
        assert_eq!(savings.amount, 170.0);
        assert!((savings.percentage - 32.69).abs() < 0.01);
        assert_eq!(result.cheapest().unwrap().name(), "b");
        assert_eq!(result.most_expensive().unwrap().name(), "c");
    }

    #[test]
    fn test_compare_is_stable() {
        let result = compare(vec![
            listing("first", 100.0),
            listing("cheap", 50.0),
            listing("second", 100.0),
            listing("third", 100.0),
        ]);

        let names: Vec<&str> = result.ordered().iter().map(Listing::name).collect();
        assert_eq!(names, vec!["cheap", "first", "second", "third"]);
    }

    #[test]
    fn test_compare_single_listing() {
        let result = compare(vec![listing("only", 300.0)]);

        assert_eq!(result.len(), 1);
        assert!(result.savings().is_none());
        assert!(result.cheapest().is_none());
        assert!(result.most_expensive().is_none());
    }

    #[test]
    fn test_compare_empty() {
        let result = compare(Vec::new());
        assert!(result.is_empty());
        assert!(result.savings().is_none());
    }
}
