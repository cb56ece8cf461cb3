//! Shopping tools: per-store search, price comparison and saving results.

use super::{ParamKind, ToolArgs, ToolParam, ToolRegistry, ToolSpec};
use crate::aggregator::compare;
use crate::collectors::{
    search_or_empty, Collector, CollectorSettings, ScrapingCollector, StaticCatalog, StoreProfile,
};
use crate::output::{render_comparison, report_file_name, write_report};
use crate::parser::schema::{Listing, SearchReport};
use crate::utils::error::{CollectError, OutputError, ToolError};
use chrono::Utc;
use serde_json::Value;
use std::path::PathBuf;

const PRODUCT_NAME: ToolParam = ToolParam {
    name: "product_name",
    kind: ParamKind::Text,
    description: "The name of the product to search for",
};

/// Collectors backing the three search tools
pub struct StoreSet {
    pub jumia: Box<dyn Collector>,
    pub marjane: Box<dyn Collector>,
    pub others: Box<dyn Collector>,
}

impl StoreSet {
    pub fn demo() -> Self {
        Self {
            jumia: Box::new(StaticCatalog::jumia_demo()),
            marjane: Box::new(StaticCatalog::marjane_demo()),
            others: Box::new(StaticCatalog::other_stores_demo()),
        }
    }

    /// Scrapers for Jumia and Marjane; other stores have no scraper and
    /// return nothing
    pub fn live(settings: &CollectorSettings) -> Result<Self, CollectError> {
        Ok(Self {
            jumia: Box::new(ScrapingCollector::new(StoreProfile::jumia(), settings)?),
            marjane: Box::new(ScrapingCollector::new(StoreProfile::marjane(), settings)?),
            others: Box::new(StaticCatalog::new("Other stores", Vec::new())),
        })
    }
}

/// Registry with the search, compare and save tools
///
/// Saved reports land in `save_dir`.
pub fn shopping_registry(stores: StoreSet, save_dir: impl Into<PathBuf>) -> ToolRegistry {
    let save_dir = save_dir.into();
    let mut registry = ToolRegistry::new();

    register_search(
        &mut registry,
        "search_jumia_morocco",
        "Search for products on Jumia Morocco. Use this to find products and their prices on Jumia. Returns a JSON array of listings.",
        stores.jumia,
    );
    register_search(
        &mut registry,
        "search_marjane_online",
        "Search for products on Marjane online store. Use this to find products and their prices on Marjane. Returns a JSON array of listings.",
        stores.marjane,
    );
    register_search(
        &mut registry,
        "search_other_morocco_stores",
        "Search other Moroccan e-commerce stores (Electroplanet, Aswak Assalam, etc) for additional price comparisons. Returns a JSON array of listings.",
        stores.others,
    );

    registry.register(
        ToolSpec {
            name: "compare_prices",
            description: "Compare prices of collected products and sort them from cheapest to most expensive. Use this after collecting products from different stores.",
            parameters: vec![ToolParam {
                name: "products_json",
                kind: ParamKind::Listings,
                description: "JSON list of products with prices",
            }],
        },
        |args| {
            let listings = listings_arg(args, "products_json")?;
            Ok(render_comparison(&compare(listings)))
        },
    );

    registry.register(
        ToolSpec {
            name: "save_search_results",
            description: "Save search results to a JSON file for future reference.",
            parameters: vec![
                ToolParam {
                    name: "product_name",
                    kind: ParamKind::Text,
                    description: "The product that was searched",
                },
                ToolParam {
                    name: "results",
                    kind: ParamKind::Listings,
                    description: "The listings to save",
                },
            ],
        },
        move |args| {
            let product_name = args.text("product_name")?;
            let result = compare(listings_arg(args, "results")?);
            let savings = result.savings().copied();

            let now = Utc::now();
            let report = SearchReport::new(product_name, result.into_ordered(), savings, now);
            let path = save_dir.join(report_file_name(product_name, now));
            write_report(&report, &path)?;

            Ok(format!("Results saved to: {}", path.display()))
        },
    );

    registry
}

fn register_search(
    registry: &mut ToolRegistry,
    name: &'static str,
    description: &'static str,
    collector: Box<dyn Collector>,
) {
    registry.register(
        ToolSpec {
            name,
            description,
            parameters: vec![PRODUCT_NAME],
        },
        move |args| {
            let product_name = args.text(PRODUCT_NAME.name)?;
            let listings = search_or_empty(collector.as_ref(), product_name);
            serde_json::to_string(&listings)
                .map_err(|e| ToolError::Output(OutputError::SerializationFailed(e)))
        },
    );
}

/// Listings given inline or as a JSON-encoded string
fn listings_arg(args: &ToolArgs<'_>, name: &str) -> Result<Vec<Listing>, ToolError> {
    let parsed = match args.get(name)? {
        Value::String(encoded) => serde_json::from_str(encoded),
        value @ Value::Array(_) => serde_json::from_value(value.clone()),
        _ => return Err(args.invalid(format!("'{}' must be a JSON list of products", name))),
    };

    parsed.map_err(|e| args.invalid(format!("'{}': {}", name, e)))
}
