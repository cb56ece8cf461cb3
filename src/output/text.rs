//! Plain text rendering of a comparison.

use crate::aggregator::ComparisonResult;
use std::fmt::{self, Write};

const RULE_WIDTH: usize = 80;

/// Render listings cheapest first, followed by the savings line
///
/// **Public** - used by the CLI and the `compare_prices` tool
pub fn render_comparison(result: &ComparisonResult) -> String {
    if result.is_empty() {
        return "No products to display.\n".to_string();
    }

    let mut out = String::new();
    match write_comparison(&mut out, result) {
        Ok(()) => out,
        Err(_) => String::new(),
    }
}

fn write_comparison(out: &mut impl Write, result: &ComparisonResult) -> fmt::Result {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    writeln!(out, "{}", heavy)?;
    writeln!(out, "PRICE COMPARISON - {} Products Found", result.len())?;
    writeln!(out, "Sorted from CHEAPEST to MOST EXPENSIVE")?;
    writeln!(out, "{}\n", heavy)?;

    for (idx, listing) in result.ordered().iter().enumerate() {
        let url = if listing.url().is_empty() { "N/A" } else { listing.url() };

        writeln!(out, "#{} - {:.2} {}", idx + 1, listing.price(), listing.currency())?;
        writeln!(out, "   Product: {}", listing.name())?;
        writeln!(out, "   Store: {}", listing.store())?;
        writeln!(out, "   Availability: {}", listing.availability())?;
        writeln!(out, "   URL: {}", url)?;
        writeln!(out, "{}", light)?;
    }

    if let (Some(savings), Some(cheapest)) = (result.savings(), result.cheapest()) {
        writeln!(
            out,
            "\nSAVINGS: Choose the cheapest option and save {:.2} {} ({:.1}% less than the most expensive)",
            savings.amount,
            cheapest.currency(),
            savings.percentage
        )?;
    }

    Ok(())
}
