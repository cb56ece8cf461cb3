use crate::collectors::CollectorSettings;
use std::path::PathBuf;

/// Where listings come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Source {
    /// Built-in placeholder catalogs, no network access
    #[default]
    Demo,
    /// Scrape the store websites
    Live,
}

/// Arguments for the search command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct SearchArgs {
    /// Product to search for
    pub query: String,

    pub source: Source,

    /// Timeout, per-store limit and politeness delay for live collectors
    pub settings: CollectorSettings,

    /// Exact path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Directory for an auto-named JSON report (optional)
    pub save_dir: Option<PathBuf>,

    /// Print the comparison as JSON instead of text
    pub print_json: bool,
}

impl Default for SearchArgs {
    fn default() -> Self {
        Self {
            query: String::new(),
            source: Source::Demo,
            settings: CollectorSettings::default(),
            output_json: None,
            save_dir: None,
            print_json: false,
        }
    }
}
