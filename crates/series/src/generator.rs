//! Synthetic series generator.
//!
//! [`SeriesGenerator`] walks the configured period window one simulated day
//! at a time, injects a price shock on the shock day of every period that
//! has a catalyst, and samples the walk into [`SeriesPoint`]s.
//!
//! The generator only reads its [`EventTable`]; every call owns its own
//! accumulators, so a single generator can be shared across threads as long
//! as each caller brings its own RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use catalysts::EventTable;
use types::{CatalystEvent, SeriesPoint};

use crate::config::{MAX_END_PRICE, SeriesConfig};
use crate::error::SeriesError;

// =============================================================================
// SimulatedDay
// =============================================================================

/// One unsampled day of the walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedDay {
    /// Index into the configured period window.
    pub period_index: usize,
    /// Day of the period, starting at 1.
    pub day: u32,
    /// Unrounded price at the end of the day.
    pub price: f64,
    /// Trend factor applied on this day.
    pub trend: f64,
    /// Whether an event shock landed on this day.
    pub shocked: bool,
}

// =============================================================================
// SeriesGenerator
// =============================================================================

/// Generates catalyst-annotated synthetic price series.
#[derive(Debug, Clone)]
pub struct SeriesGenerator<'a> {
    config: SeriesConfig,
    events: &'a EventTable,
}

impl<'a> SeriesGenerator<'a> {
    /// Create a generator over a read-only event table.
    ///
    /// Fails if the configuration is inconsistent (see [`SeriesConfig::validate`]).
    pub fn new(config: SeriesConfig, events: &'a EventTable) -> Result<Self, SeriesError> {
        config.validate()?;
        Ok(Self { config, events })
    }

    /// Get current configuration.
    pub fn config(&self) -> &SeriesConfig {
        &self.config
    }

    /// Generate a sampled series ending exactly at `end_price`.
    ///
    /// Returns `config.series_len()` points. The last point's price is
    /// overwritten with `end_price`, so it may jump relative to the walk.
    pub fn generate<R: Rng>(
        &self,
        ticker: &str,
        end_price: f64,
        volatility: f64,
        rng: &mut R,
    ) -> Result<Vec<SeriesPoint>, SeriesError> {
        let days = self.simulate(ticker, end_price, volatility, rng)?;
        let events = self.events.events_for(ticker);

        let mut points = Vec::with_capacity(self.config.series_len());
        for step in days
            .iter()
            .filter(|d| d.day % self.config.sample_interval == 0)
        {
            let period = &self.config.periods[step.period_index];
            let attached_event = if step.shocked {
                first_event_in(events, period).cloned()
            } else {
                None
            };

            points.push(SeriesPoint {
                period_label: period.clone(),
                fine_label: SeriesPoint::fine_label_for(period, step.day),
                price: round_cents(step.price),
                is_inflection: attached_event.is_some(),
                attached_event,
            });
        }

        if let Some(last) = points.last_mut() {
            last.price = end_price;
        }

        debug!(
            ticker,
            end_price,
            volatility,
            points = points.len(),
            inflections = points.iter().filter(|p| p.is_inflection).count(),
            "generated synthetic series"
        );
        Ok(points)
    }

    /// [`generate`](Self::generate) with a `StdRng` seeded from `seed`.
    pub fn generate_seeded(
        &self,
        ticker: &str,
        end_price: f64,
        volatility: f64,
        seed: u64,
    ) -> Result<Vec<SeriesPoint>, SeriesError> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(ticker, end_price, volatility, &mut rng)
    }

    /// Run the day-by-day walk without sampling or the final override.
    ///
    /// Returns `periods × days_per_period` entries. With `volatility == 0`
    /// no randomness is drawn and every non-shock day satisfies
    /// `price == previous_price × trend` (unless clamped to the floor).
    pub fn simulate<R: Rng>(
        &self,
        ticker: &str,
        end_price: f64,
        volatility: f64,
        rng: &mut R,
    ) -> Result<Vec<SimulatedDay>, SeriesError> {
        validate_inputs(end_price, volatility)?;

        let cfg = &self.config;
        let events = self.events.events_for(ticker);
        for event in events {
            if !cfg.periods.contains(&event.period) {
                warn!(
                    ticker,
                    period = %event.period,
                    "catalyst period outside chart window, no inflection will be drawn"
                );
            }
        }

        let mut days = Vec::with_capacity(cfg.periods.len() * cfg.days_per_period as usize);
        let mut price = end_price * cfg.start_fraction;
        let mut trend = 1.0;

        for (period_index, period) in cfg.periods.iter().enumerate() {
            let event = first_event_in(events, period);

            for day in 1..=cfg.days_per_period {
                let shocked = day == cfg.shock_day && event.is_some();
                if shocked && let Some(event) = event {
                    price *= cfg.shock_multiplier(event.polarity);
                    trend = cfg.drift_for(event.polarity);
                }

                let noise = if volatility > 0.0 {
                    rng.random_range(-0.5_f64..0.5) * volatility * price
                } else {
                    0.0
                };
                price = (price * trend + noise).max(cfg.price_floor);
                if !price.is_finite() {
                    return Err(SeriesError::Diverged {
                        period: period.clone(),
                        day,
                    });
                }

                days.push(SimulatedDay {
                    period_index,
                    day,
                    price,
                    trend,
                    shocked,
                });
            }

            trend = cfg.relax_trend(trend);
        }

        Ok(days)
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn validate_inputs(end_price: f64, volatility: f64) -> Result<(), SeriesError> {
    if !end_price.is_finite() || end_price <= 0.0 || end_price > MAX_END_PRICE {
        return Err(SeriesError::invalid(
            "end_price",
            format!("must be in (0, {MAX_END_PRICE:e}], got {end_price}"),
        ));
    }
    if !volatility.is_finite() || volatility < 0.0 {
        return Err(SeriesError::invalid(
            "volatility",
            format!("must be finite and non-negative, got {volatility}"),
        ));
    }
    Ok(())
}

fn first_event_in<'e>(events: &'e [CatalystEvent], period: &str) -> Option<&'e CatalystEvent> {
    events.iter().find(|e| e.period == period)
}

#[inline]
fn round_cents(price: f64) -> f64 {
    let cents = (price * 100.0).round();
    if cents.is_finite() { cents / 100.0 } else { price }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use types::Polarity;

    fn table() -> EventTable {
        EventTable::new()
            .with_event("ACME", CatalystEvent::new("Aug", Polarity::Positive, "beat", "up"))
            .with_event("ACME", CatalystEvent::new("Oct", Polarity::Negative, "miss", "down"))
    }

    #[test]
    fn test_rejects_non_positive_end_price() {
        let table = table();
        let generator = SeriesGenerator::new(SeriesConfig::default(), &table).unwrap();
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY, 1e307, MAX_END_PRICE * 2.0] {
            let err = generator.generate_seeded("ACME", bad, 0.02, 1).unwrap_err();
            assert!(matches!(err, SeriesError::InvalidArgument { name: "end_price", .. }));
        }
    }

    #[test]
    fn test_rejects_negative_volatility() {
        let table = table();
        let generator = SeriesGenerator::new(SeriesConfig::default(), &table).unwrap();
        let err = generator.generate_seeded("ACME", 10.0, -0.01, 1).unwrap_err();
        assert!(matches!(err, SeriesError::InvalidArgument { name: "volatility", .. }));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let table = table();
        let config = SeriesConfig::default().with_shock(31, 0.05);
        assert!(SeriesGenerator::new(config, &table).is_err());
    }

    #[test]
    fn test_simulate_covers_every_day() {
        let table = table();
        let generator = SeriesGenerator::new(SeriesConfig::default(), &table).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let days = generator.simulate("ACME", 50.0, 0.02, &mut rng).unwrap();

        assert_eq!(days.len(), 7 * 30);
        assert_eq!(days.iter().filter(|d| d.shocked).count(), 2);
        assert_eq!(days[0].day, 1);
        assert_eq!(days[209].day, 30);
        assert_eq!(days[209].period_index, 6);
    }

    #[test]
    fn test_shock_direction_follows_polarity() {
        let table = table();
        let generator = SeriesGenerator::new(SeriesConfig::default(), &table).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let days = generator.simulate("ACME", 100.0, 0.0, &mut rng).unwrap();

        let shocked: Vec<_> = days.iter().enumerate().filter(|(_, d)| d.shocked).collect();
        let (up_idx, up) = shocked[0];
        let (down_idx, down) = shocked[1];
        assert!(up.price > days[up_idx - 1].price);
        assert!(down.price < days[down_idx - 1].price);
        assert_eq!(up.trend, 1.002);
        assert_eq!(down.trend, 0.998);
    }

    #[test]
    fn test_largest_end_price_stays_finite() {
        let table = table();
        let generator = SeriesGenerator::new(SeriesConfig::default(), &table).unwrap();
        let points = generator.generate_seeded("ACME", MAX_END_PRICE, 0.0, 1).unwrap();

        assert_eq!(points.len(), 70);
        assert!(points.iter().all(|p| p.price.is_finite() && p.price > 0.0));
        assert_eq!(points[69].price, MAX_END_PRICE);
    }

    #[test]
    fn test_runaway_volatility_is_an_error() {
        let table = EventTable::new();
        let generator = SeriesGenerator::new(SeriesConfig::default(), &table).unwrap();
        let err = generator
            .generate_seeded("ACME", 100.0, f64::MAX, 9)
            .unwrap_err();
        assert!(matches!(err, SeriesError::Diverged { .. }));
    }

    #[test]
    fn test_price_floor_holds_under_extreme_volatility() {
        let table = EventTable::new();
        let config = SeriesConfig::default().with_price_floor(0.5);
        let generator = SeriesGenerator::new(config, &table).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let days = generator.simulate("ACME", 1.0, 50.0, &mut rng).unwrap();

        assert!(days.iter().all(|d| d.price >= 0.5));
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(12.345_6), 12.35);
        assert_eq!(round_cents(0.004), 0.0);
        assert_eq!(round_cents(27.0), 27.0);
        assert_eq!(round_cents(1e307), 1e307);
    }

    #[test]
    fn test_first_event_wins_within_period() {
        let table = EventTable::new()
            .with_event("DUP", CatalystEvent::new("Sep", Polarity::Negative, "first", ""))
            .with_event("DUP", CatalystEvent::new("Sep", Polarity::Positive, "second", ""));
        let generator = SeriesGenerator::new(SeriesConfig::default(), &table).unwrap();
        let points = generator.generate_seeded("DUP", 10.0, 0.0, 1).unwrap();

        let inflections: Vec<_> = points.iter().filter(|p| p.is_inflection).collect();
        assert_eq!(inflections.len(), 1);
        assert_eq!(
            inflections[0].attached_event.as_ref().unwrap().description,
            "first"
        );
    }
}
