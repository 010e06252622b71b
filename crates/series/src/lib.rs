//! Synthetic price series with catalyst-driven inflection points.
//!
//! This crate provides:
//! - **SeriesConfig**: the walk's constants (window, sampling, shock sizes)
//! - **SeriesGenerator**: produces a sampled price path that ends exactly at
//!   a given price, with a marked shock for each catalyst of the ticker
//! - **SimulatedDay**: the unsampled day-by-day trace behind a series
//!
//! # Algorithm
//!
//! ```text
//! price = end × start_fraction, trend = 1.0
//! for period in window:
//!   for day in 1..=days_per_period:
//!     day == shock_day && event?  → price ×= 1 ± shock_pct, trend = drift
//!     price = max(price × trend + noise, floor)
//!     day % sample_interval == 0  → emit SeriesPoint
//!   trend = 1 + (trend − 1)(1 − damping)
//! last.price = end
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use catalysts::EventTable;
//! use series::{SeriesConfig, SeriesGenerator};
//!
//! let table = EventTable::builtin();
//! let generator = SeriesGenerator::new(SeriesConfig::default(), &table)?;
//! let points = generator.generate_seeded("VKTX", 32.03, 0.05, 42)?;
//! ```
//!
//! Randomness is always injected: [`SeriesGenerator::generate`] takes any
//! `rand::Rng`, and the `_seeded` helpers build a `StdRng` from a `u64`.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod generator;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{DEFAULT_VOLATILITY, MAX_END_PRICE, MIN_PRICE_FLOOR, SeriesConfig};
pub use error::SeriesError;
pub use generator::{SeriesGenerator, SimulatedDay};
