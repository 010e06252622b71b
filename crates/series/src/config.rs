//! Configuration for the synthetic series walk.
//!
//! All magic numbers of the walk live here as named fields so they can be
//! tuned or pinned in tests.

use serde::{Deserialize, Serialize};
use types::{PeriodLabel, Polarity, default_periods};

use crate::error::SeriesError;

/// Default daily noise amplitude as a fraction of price.
pub const DEFAULT_VOLATILITY: f64 = 0.02;

/// Largest accepted end price.
pub const MAX_END_PRICE: f64 = 1e12;

/// Smallest accepted price floor. Anything lower could round to zero cents.
pub const MIN_PRICE_FLOOR: f64 = 0.01;

/// Constants of the synthetic walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // Window
    // ─────────────────────────────────────────────────────────────────────────
    /// Ordered period labels making up the chart window.
    pub periods: Vec<PeriodLabel>,
    /// Simulated days per period.
    pub days_per_period: u32,
    /// Emit a sample every N-th day (days N, 2N, ...).
    pub sample_interval: u32,

    // ─────────────────────────────────────────────────────────────────────────
    // Walk
    // ─────────────────────────────────────────────────────────────────────────
    /// Starting price as a fraction of the end price.
    pub start_fraction: f64,
    /// Prices never fall below this value.
    pub price_floor: f64,

    // ─────────────────────────────────────────────────────────────────────────
    // Shocks
    // ─────────────────────────────────────────────────────────────────────────
    /// Day of the period on which an event shock lands. Must be a sampled day.
    pub shock_day: u32,
    /// Immediate jump size as a fraction of price (0.05 = 5%).
    pub shock_pct: f64,
    /// Trend factor set by a positive event.
    pub positive_drift: f64,
    /// Trend factor set by a negative event.
    pub negative_drift: f64,
    /// Fraction of the trend's distance from 1.0 removed after each period.
    pub trend_damping: f64,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            periods: default_periods(),
            days_per_period: 30,
            sample_interval: 3,

            start_fraction: 0.85,
            price_floor: 0.01,

            shock_day: 15,
            shock_pct: 0.05,
            positive_drift: 1.002,
            negative_drift: 0.998,
            trend_damping: 0.3,
        }
    }
}

impl SeriesConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder-style setters
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the period window.
    pub fn with_periods<I, S>(mut self, periods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PeriodLabel>,
    {
        self.periods = periods.into_iter().map(Into::into).collect();
        self
    }

    /// Set days per period and the sampling interval.
    pub fn with_sampling(mut self, days_per_period: u32, sample_interval: u32) -> Self {
        self.days_per_period = days_per_period;
        self.sample_interval = sample_interval;
        self
    }

    /// Set the shock day and size.
    pub fn with_shock(mut self, shock_day: u32, shock_pct: f64) -> Self {
        self.shock_day = shock_day;
        self.shock_pct = shock_pct;
        self
    }

    /// Set the post-event drift factors.
    pub fn with_drift(mut self, positive: f64, negative: f64) -> Self {
        self.positive_drift = positive;
        self.negative_drift = negative;
        self
    }

    /// Set the per-period trend damping.
    pub fn with_trend_damping(mut self, damping: f64) -> Self {
        self.trend_damping = damping;
        self
    }

    /// Set the price floor.
    pub fn with_price_floor(mut self, floor: f64) -> Self {
        self.price_floor = floor;
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived values
    // ─────────────────────────────────────────────────────────────────────────

    /// Samples emitted per period.
    pub fn samples_per_period(&self) -> usize {
        (self.days_per_period / self.sample_interval) as usize
    }

    /// Total samples in a generated series.
    pub fn series_len(&self) -> usize {
        self.periods.len() * self.samples_per_period()
    }

    /// Multiplier applied to price on an event day.
    pub fn shock_multiplier(&self, polarity: Polarity) -> f64 {
        1.0 + polarity.sign() * self.shock_pct
    }

    /// Trend factor in force after an event.
    pub fn drift_for(&self, polarity: Polarity) -> f64 {
        polarity.select(self.positive_drift, self.negative_drift)
    }

    /// Relax a trend factor one period toward neutral.
    #[inline]
    pub fn relax_trend(&self, trend: f64) -> f64 {
        1.0 + (trend - 1.0) * (1.0 - self.trend_damping)
    }

    /// Check the constants are internally consistent.
    pub fn validate(&self) -> Result<(), SeriesError> {
        if self.periods.is_empty() {
            return Err(SeriesError::invalid("periods", "window has no periods"));
        }
        if self.days_per_period == 0 {
            return Err(SeriesError::invalid("days_per_period", "must be at least 1"));
        }
        if self.sample_interval == 0 || self.sample_interval > self.days_per_period {
            return Err(SeriesError::invalid(
                "sample_interval",
                format!("must be in 1..={}", self.days_per_period),
            ));
        }
        if self.shock_day == 0 || self.shock_day > self.days_per_period {
            return Err(SeriesError::invalid(
                "shock_day",
                format!("must be in 1..={}", self.days_per_period),
            ));
        }
        if self.shock_day % self.sample_interval != 0 {
            return Err(SeriesError::invalid(
                "shock_day",
                format!(
                    "day {} is not sampled with interval {}",
                    self.shock_day, self.sample_interval
                ),
            ));
        }
        if !(self.start_fraction.is_finite() && self.start_fraction > 0.0) {
            return Err(SeriesError::invalid("start_fraction", "must be finite and positive"));
        }
        if !(self.price_floor.is_finite() && self.price_floor >= MIN_PRICE_FLOOR) {
            return Err(SeriesError::invalid(
                "price_floor",
                format!("must be finite and at least {MIN_PRICE_FLOOR}"),
            ));
        }
        if !(0.0..1.0).contains(&self.shock_pct) {
            return Err(SeriesError::invalid("shock_pct", "must be in [0, 1)"));
        }
        if !(self.positive_drift.is_finite() && self.negative_drift.is_finite())
            || self.positive_drift <= 0.0
            || self.negative_drift <= 0.0
        {
            return Err(SeriesError::invalid("drift", "factors must be finite and positive"));
        }
        if !(0.0..=1.0).contains(&self.trend_damping) {
            return Err(SeriesError::invalid("trend_damping", "must be in [0, 1]"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let config = SeriesConfig::default();
        assert_eq!(config.periods.len(), 7);
        assert_eq!(config.samples_per_period(), 10);
        assert_eq!(config.series_len(), 70);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_samples_per_period_floors() {
        let config = SeriesConfig::default().with_sampling(31, 3).with_shock(15, 0.05);
        assert_eq!(config.samples_per_period(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_shock_multiplier_by_polarity() {
        let config = SeriesConfig::default();
        assert!((config.shock_multiplier(Polarity::Positive) - 1.05).abs() < 1e-12);
        assert!((config.shock_multiplier(Polarity::Negative) - 0.95).abs() < 1e-12);
        assert_eq!(config.drift_for(Polarity::Positive), 1.002);
        assert_eq!(config.drift_for(Polarity::Negative), 0.998);
    }

    #[test]
    fn test_relax_trend_moves_toward_neutral() {
        let config = SeriesConfig::default();
        let relaxed = config.relax_trend(1.002);
        assert!(relaxed > 1.0 && relaxed < 1.002);
        assert!((relaxed - 1.0014).abs() < 1e-12);
        assert_eq!(config.relax_trend(1.0), 1.0);
    }

    #[test]
    fn test_validate_rejects_unsampled_shock_day() {
        let config = SeriesConfig::default().with_shock(14, 0.05);
        assert!(matches!(
            config.validate(),
            Err(SeriesError::InvalidArgument { name: "shock_day", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_sub_cent_floor() {
        for floor in [0.004, 0.0, -1.0, f64::NAN] {
            let config = SeriesConfig::default().with_price_floor(floor);
            assert!(matches!(
                config.validate(),
                Err(SeriesError::InvalidArgument { name: "price_floor", .. })
            ));
        }
        assert!(SeriesConfig::default().with_price_floor(MIN_PRICE_FLOOR).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let config = SeriesConfig::default().with_sampling(30, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_window() {
        let config = SeriesConfig::default().with_periods(Vec::<String>::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: SeriesConfig = serde_json::from_str(r#"{"shock_pct": 0.1}"#).unwrap();
        assert_eq!(config.shock_pct, 0.1);
        assert_eq!(config.days_per_period, 30);
    }
}
