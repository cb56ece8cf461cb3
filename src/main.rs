//! Price Scout CLI
//!
//! Searches Moroccan e-commerce sites for a product and prints the offers
//! sorted from cheapest to most expensive.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;
use std::time::Duration;

use price_scout::collectors::CollectorSettings;
use price_scout::commands::{
    call_tool, compare_listings_file, display_tools, display_version, execute_search,
    validate_args, validate_report_file, validate_settings, SearchArgs, Source,
};
use price_scout::tools::{shopping_registry, StoreSet};
use price_scout::utils::config::{
    DEFAULT_REQUEST_DELAY, DEFAULT_RESULTS_PER_STORE, DEFAULT_TIMEOUT,
};

/// Price Scout - compare product prices across Moroccan stores
#[derive(Parser, Debug)]
#[command(name = "price-scout")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Search every store for a product and compare prices
    Search {
        /// Product name to search for
        query: String,

        /// Scrape the store websites instead of using the demo catalogs
        #[arg(long)]
        live: bool,

        /// Output path for the JSON report (takes precedence over --save-dir)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory for an auto-named JSON report
        #[arg(long, env = "PRICE_SCOUT_SAVE_DIR")]
        save_dir: Option<PathBuf>,

        #[command(flatten)]
        collect: CollectOptions,

        /// Print the comparison as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare a JSON file of listings
    Compare {
        /// Path to a JSON array of listings
        #[arg(short, long)]
        file: PathBuf,

        /// Print the comparison as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a saved search report
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// List the tools an assistant can call
    Tools,

    /// Invoke one tool with JSON arguments
    Call {
        /// Tool name (see `tools`)
        tool: String,

        /// JSON object of arguments
        #[arg(long, default_value = "{}")]
        args: String,

        /// Back the search tools with live scrapers
        #[arg(long)]
        live: bool,

        /// Directory where save_search_results writes reports
        #[arg(long, env = "PRICE_SCOUT_SAVE_DIR", default_value = ".")]
        save_dir: PathBuf,

        #[command(flatten)]
        collect: CollectOptions,
    },

    /// Display version information
    Version,
}

/// Live collector tuning
#[derive(clap::Args, Debug)]
struct CollectOptions {
    /// Maximum listings kept per store
    #[arg(long, env = "PRICE_SCOUT_LIMIT", default_value_t = DEFAULT_RESULTS_PER_STORE)]
    limit: usize,

    /// Request timeout in seconds
    #[arg(long, env = "PRICE_SCOUT_TIMEOUT", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,

    /// Pause after each store request, in milliseconds
    #[arg(long, env = "PRICE_SCOUT_DELAY_MS", default_value_t = DEFAULT_REQUEST_DELAY.as_millis() as u64)]
    delay_ms: u64,
}

impl CollectOptions {
    fn settings(&self) -> CollectorSettings {
        CollectorSettings {
            timeout: Duration::from_secs(self.timeout),
            results_per_store: self.limit,
            request_delay: Duration::from_millis(self.delay_ms),
        }
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Search {
            query,
            live,
            output,
            save_dir,
            collect,
            json,
        } => {
            let args = SearchArgs {
                query,
                source: if live { Source::Live } else { Source::Demo },
                settings: collect.settings(),
                output_json: output,
                save_dir,
                print_json: json,
            };

            // Validate args first
            validate_args(&args)?;

            execute_search(&args)?;
        }

        Commands::Compare { file, json } => {
            compare_listings_file(&file, json)?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Tools => {
            display_tools(&shopping_registry(StoreSet::demo(), "."));
        }

        Commands::Call {
            tool,
            args,
            live,
            save_dir,
            collect,
        } => {
            let stores = if live {
                let settings = collect.settings();
                validate_settings(&settings)?;
                StoreSet::live(&settings)?
            } else {
                StoreSet::demo()
            };
            let registry = shopping_registry(stores, save_dir);
            println!("{}", call_tool(&registry, &tool, &args)?);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
