//! Search command implementation.
//!
//! The search command:
//! 1. Builds the collectors for the chosen source
//! 2. Collects listings from every store
//! 3. Compares prices
//! 4. Prints the comparison
//! 5. Writes the JSON report (if requested)

use super::models::{SearchArgs, Source};
use crate::aggregator::{compare, ComparisonResult};
use crate::collectors::{
    collect_all, demo_collectors, live_collectors, Collector, CollectorSettings,
};
use crate::output::{render_comparison, report_file_name, write_report};
use crate::parser::schema::SearchReport;
use crate::utils::config::MAX_RESULTS_PER_STORE;
use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Execute the search command
///
/// **Public** - main entry point called from main.rs
///
/// Returns the comparison and the path of the written report, if any.
///
/// # Errors
/// * Live collector construction failures
/// * Report write errors
pub fn execute_search(args: &SearchArgs) -> Result<(ComparisonResult, Option<PathBuf>)> {
    let start_time = Instant::now();

    info!("Searching for '{}' ({:?} source)", args.query, args.source);

    // Step 1: Build collectors
    info!("Step 1/4: Preparing collectors...");
    let collectors: Vec<Box<dyn Collector>> = match args.source {
        Source::Demo => demo_collectors(),
        Source::Live => {
            live_collectors(&args.settings).context("Failed to create store collectors")?
        }
    };

    // Step 2: Collect
    info!("Step 2/4: Collecting from {} stores...", collectors.len());
    let listings = collect_all(&collectors, &args.query);
    debug!("Collected {} listings", listings.len());

    // Step 3: Compare
    info!("Step 3/4: Comparing prices...");
    let result = compare(listings);
    if let Some(savings) = result.savings() {
        info!("Savings: {}", savings.summary());
    }

    // Step 4: Present and persist
    info!("Step 4/4: Writing output...");
    if args.print_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("Failed to serialize comparison")?
        );
    } else {
        print!("{}", render_comparison(&result));
    }

    let report_path = persist_report(args, &result)?;

    info!(
        "Search completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok((result, report_path))
}

fn persist_report(args: &SearchArgs, result: &ComparisonResult) -> Result<Option<PathBuf>> {
    let now = Utc::now();
    let path = match (&args.output_json, &args.save_dir) {
        (Some(path), _) => path.clone(),
        (None, Some(dir)) => dir.join(report_file_name(&args.query, now)),
        (None, None) => return Ok(None),
    };

    let report = SearchReport::new(
        args.query.clone(),
        result.ordered().to_vec(),
        result.savings().copied(),
        now,
    );
    write_report(&report, &path).context("Failed to write search report")?;

    info!("✓ Report written to: {}", path.display());
    Ok(Some(path))
}

/// Validate search arguments
///
/// **Public** - can be called before execute_search for early validation
pub fn validate_args(args: &SearchArgs) -> Result<()> {
    if args.query.trim().is_empty() {
        anyhow::bail!("Product name cannot be empty");
    }

    validate_settings(&args.settings)
}

/// Validate live collector settings
///
/// **Public** - shared by the search and call commands
pub fn validate_settings(settings: &CollectorSettings) -> Result<()> {
    if settings.results_per_store == 0 {
        anyhow::bail!("limit must be greater than 0");
    }

    if settings.results_per_store > MAX_RESULTS_PER_STORE {
        anyhow::bail!("limit is too large (max {})", MAX_RESULTS_PER_STORE);
    }

    if settings.timeout.is_zero() {
        anyhow::bail!("timeout must be greater than 0");
    }

    Ok(())
}
