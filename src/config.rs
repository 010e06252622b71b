//! Central configuration for the catalyst-charts CLI.
//!
//! Data sources and output knobs in one place; every field has a default
//! so the binary runs with nothing but built-in data.

use std::path::PathBuf;

use catalysts::EventTable;
use dashboard::DashboardData;
use series::{DEFAULT_VOLATILITY, SeriesConfig};

/// Master configuration for a CLI run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // Data Sources
    // ─────────────────────────────────────────────────────────────────────────
    /// Event table file (JSON or TOML). `None` uses the built-in table.
    pub events_path: Option<PathBuf>,
    /// Dashboard dataset file (JSON). `None` uses the built-in snapshot.
    pub data_path: Option<PathBuf>,

    // ─────────────────────────────────────────────────────────────────────────
    // Series
    // ─────────────────────────────────────────────────────────────────────────
    /// Walk constants.
    pub series: SeriesConfig,
    /// Daily noise amplitude when none is given on the command line.
    pub volatility: f64,
    /// RNG seed. `None` draws a fresh seed per run.
    pub seed: Option<u64>,

    // ─────────────────────────────────────────────────────────────────────────
    // Output
    // ─────────────────────────────────────────────────────────────────────────
    /// Rows shown in the top-movers list.
    pub movers: usize,
    /// Items shown in the intelligence feed.
    pub feed_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            events_path: None,
            data_path: None,

            series: SeriesConfig::default(),
            volatility: DEFAULT_VOLATILITY,
            seed: None,

            movers: 5,
            feed_limit: 10,
        }
    }
}

impl AppConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder-style setters for fluent configuration
    // ─────────────────────────────────────────────────────────────────────────

    pub fn events_path(mut self, path: Option<PathBuf>) -> Self {
        self.events_path = path;
        self
    }

    pub fn data_path(mut self, path: Option<PathBuf>) -> Self {
        self.data_path = path;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    pub fn movers(mut self, movers: usize) -> Self {
        self.movers = movers;
        self
    }

    pub fn feed_limit(mut self, limit: usize) -> Self {
        self.feed_limit = limit;
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Loading
    // ─────────────────────────────────────────────────────────────────────────

    /// The configured event table, or the built-in one.
    pub fn load_events(&self) -> Result<EventTable, catalysts::TableError> {
        match &self.events_path {
            Some(path) => EventTable::load(path),
            None => Ok(EventTable::builtin()),
        }
    }

    /// The configured dataset, or the built-in snapshot.
    pub fn load_data(&self) -> Result<DashboardData, dashboard::DataError> {
        match &self.data_path {
            Some(path) => DashboardData::load(path),
            None => Ok(DashboardData::builtin()),
        }
    }
}
