//! Dashboard analytics over quotes, pipeline programs and news items.
//!
//! This crate provides:
//! - **Market**: aggregate statistics, top movers, sentiment scoring and
//!   market-cap formatting
//! - **Pipeline**: route / mechanism / stage filtering of drug programs
//! - **Intel**: keyword priority classification and company extraction
//! - **Calendar**: catalyst countdowns
//! - **Dataset**: the bundled default data and JSON loading
//!
//! All functions take their data as explicit read-only parameters.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calendar;
pub mod dataset;
pub mod intel;
pub mod market;
pub mod pipeline;

// =============================================================================
// Re-exports
// =============================================================================

pub use calendar::days_until;
pub use dataset::{DashboardData, DataError};
pub use intel::{at_least, classify_priority, extract_company, latest};
pub use market::{
    MarketStatistics, PipelineStrength, SentimentLabel, format_market_cap, sentiment_score,
    top_movers,
};
pub use pipeline::{PipelineFilter, unique_stages};
