//! Core types for catalyst charts.
//!
//! This crate provides the data types shared by the event table, the
//! synthetic series generator and the dashboard analytics:
//! - **Identifiers**: ticker symbols and period labels
//! - **Catalysts**: per-ticker events with a directional polarity
//! - **Series**: generated chart samples
//! - **Market**: quotes, pipeline entries, intelligence items and milestones

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalyst;
pub mod ids;
pub mod market;
pub mod series;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalyst::{CatalystEvent, Citation, Polarity};
pub use ids::{DEFAULT_PERIODS, PeriodLabel, Symbol, default_periods};
pub use market::{
    IntelItem, Mechanism, Milestone, PipelineEntry, Priority, Quote, Route, TrialStatus,
};
pub use series::SeriesPoint;
