//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default timeout for store requests
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Pause after each live search so stores are not hammered
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(1);

/// Listings kept per store when nothing else is requested
pub const DEFAULT_RESULTS_PER_STORE: usize = 10;
pub const MAX_RESULTS_PER_STORE: usize = 50;

/// Currency every supported store prices in (Moroccan Dirham)
pub const DEFAULT_CURRENCY: &str = "MAD";

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub const JUMIA_BASE_URL: &str = "https://www.jumia.ma";
pub const MARJANE_BASE_URL: &str = "https://www.marjane.ma";

/// Prefix of saved report files: `results_<query>_<timestamp>.json`
pub const REPORT_FILE_PREFIX: &str = "results";

/// Markers stripped from price text before parsing, longest first
pub const CURRENCY_MARKERS: &[&str] = &["MAD", "Dhs", "DHS", "DH", "Dh"];
