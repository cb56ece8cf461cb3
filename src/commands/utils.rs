use crate::aggregator::{compare, ComparisonResult};
use crate::output::{read_report, render_comparison};
use crate::parser::schema::Listing;
use crate::tools::ToolRegistry;
use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;

/// Compare a JSON array of listings read from a file
pub fn compare_listings_file(file_path: &Path, print_json: bool) -> Result<ComparisonResult> {
    let file = File::open(file_path)
        .with_context(|| format!("Failed to open {}", file_path.display()))?;

    let listings: Vec<Listing> = serde_json::from_reader(file)
        .with_context(|| format!("Invalid listings in {}", file_path.display()))?;

    let result = compare(listings);

    if print_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_comparison(&result));
    }

    Ok(result)
}

/// Validate a saved search report
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)?;

    if report.total_results != report.products.len() {
        anyhow::bail!(
            "total_results is {} but the report holds {} products",
            report.total_results,
            report.products.len()
        );
    }

    let sorted = report
        .products
        .windows(2)
        .all(|pair| pair[0].price() <= pair[1].price());
    if !sorted {
        anyhow::bail!("Products are not ordered cheapest first");
    }

    println!("✓ Valid report JSON");
    println!("  Query: {}", report.search_query);
    println!("  Generated: {}", report.timestamp);
    println!("  Products: {}", report.total_results);
    if let Some(savings) = report.savings {
        println!("  {}", savings.summary());
    }

    Ok(())
}

/// Print every registered tool with its parameters
pub fn display_tools(registry: &ToolRegistry) {
    println!("Available tools:");
    for spec in registry.specs() {
        println!();
        println!("  {}", spec.name);
        println!("    {}", spec.description);
        for param in &spec.parameters {
            println!("    - {} ({:?}): {}", param.name, param.kind, param.description);
        }
    }
}

/// Dispatch one tool call with JSON-encoded arguments
pub fn call_tool(registry: &ToolRegistry, name: &str, args_json: &str) -> Result<String> {
    let args: serde_json::Value =
        serde_json::from_str(args_json).context("Tool arguments must be valid JSON")?;

    registry
        .dispatch(name, &args)
        .with_context(|| format!("Tool {} failed", name))
}

/// Display version information
pub fn display_version() {
    println!("Price Scout v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Compare product prices across Moroccan e-commerce sites.");
}
