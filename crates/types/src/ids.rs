//! Identifier types.

/// Stock ticker symbol (e.g., "LLY", "VKTX").
pub type Symbol = String;

/// Coarse period label (e.g., "Sep").
pub type PeriodLabel = String;

/// The fixed chart window: seven monthly buckets ending in January.
pub const DEFAULT_PERIODS: [&str; 7] = ["Jul", "Aug", "Sep", "Oct", "Nov", "Dec", "Jan"];

/// Owned copy of [`DEFAULT_PERIODS`].
pub fn default_periods() -> Vec<PeriodLabel> {
    DEFAULT_PERIODS.iter().map(|p| p.to_string()).collect()
}
