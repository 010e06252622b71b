//! The per-ticker event table.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use types::{CatalystEvent, PeriodLabel, Symbol, default_periods};

// =============================================================================
// Errors
// =============================================================================

#[derive(Error, Debug)]
pub enum TableError {
    #[error("failed to read event table: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON event table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML event table: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{ticker}: event period '{period}' is outside the chart window")]
    UnknownPeriod { ticker: Symbol, period: PeriodLabel },

    #[error("{ticker}: more than one event in period '{period}'")]
    DuplicatePeriod { ticker: Symbol, period: PeriodLabel },
}

// =============================================================================
// EventTable
// =============================================================================

/// Maps ticker symbols to their ordered catalyst events.
///
/// Lookups are exact-match on the symbol. An unknown ticker has no events,
/// which is not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventTable {
    events: BTreeMap<Symbol, Vec<CatalystEvent>>,
}

impl EventTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event to a ticker's list.
    pub fn insert(&mut self, ticker: impl Into<Symbol>, event: CatalystEvent) {
        self.events.entry(ticker.into()).or_default().push(event);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_event(mut self, ticker: impl Into<Symbol>, event: CatalystEvent) -> Self {
        self.insert(ticker, event);
        self
    }

    /// Events for a ticker, in insertion order. Empty when the ticker is unknown.
    pub fn events_for(&self, ticker: &str) -> &[CatalystEvent] {
        self.events.get(ticker).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// First event for `ticker` in `period`, if any.
    pub fn event_in_period(&self, ticker: &str, period: &str) -> Option<&CatalystEvent> {
        self.events_for(ticker).iter().find(|e| e.period == period)
    }

    /// All tickers with at least one entry, sorted.
    pub fn tickers(&self) -> impl Iterator<Item = &Symbol> {
        self.events.keys()
    }

    /// Number of tickers in the table.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total number of events across all tickers.
    pub fn event_count(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    /// Check that every event falls in `periods` and no ticker has two
    /// events in the same period.
    pub fn validate(&self, periods: &[PeriodLabel]) -> Result<(), TableError> {
        for (ticker, events) in &self.events {
            let mut seen: Vec<&str> = Vec::with_capacity(events.len());
            for event in events {
                if !periods.iter().any(|p| *p == event.period) {
                    return Err(TableError::UnknownPeriod {
                        ticker: ticker.clone(),
                        period: event.period.clone(),
                    });
                }
                if seen.contains(&event.period.as_str()) {
                    return Err(TableError::DuplicatePeriod {
                        ticker: ticker.clone(),
                        period: event.period.clone(),
                    });
                }
                seen.push(&event.period);
            }
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Loading
    // ─────────────────────────────────────────────────────────────────────────

    /// Parse a JSON table (`{"VKTX": [{...}, ...]}`) and validate it against
    /// the default chart window.
    pub fn from_json_str(s: &str) -> Result<Self, TableError> {
        let table: Self = serde_json::from_str(s)?;
        table.validate(&default_periods())?;
        Ok(table)
    }

    /// Parse a TOML table (`[[VKTX]]` array-of-tables per ticker) and
    /// validate it against the default chart window.
    pub fn from_toml_str(s: &str) -> Result<Self, TableError> {
        let table: Self = toml::from_str(s)?;
        table.validate(&default_periods())?;
        Ok(table)
    }

    /// Load a table from disk. `.toml` files are parsed as TOML, anything
    /// else as JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let table = if is_toml {
            Self::from_toml_str(&content)?
        } else {
            Self::from_json_str(&content)?
        };

        debug!(
            path = %path.display(),
            tickers = table.len(),
            events = table.event_count(),
            "loaded event table"
        );
        Ok(table)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use types::Polarity;

    fn event(period: &str, polarity: Polarity) -> CatalystEvent {
        CatalystEvent::new(period, polarity, "desc", "impact")
    }

    #[test]
    fn test_unknown_ticker_is_empty() {
        let table = EventTable::new().with_event("VKTX", event("Sep", Polarity::Positive));
        assert!(table.events_for("NOPE").is_empty());
        assert_eq!(table.events_for("VKTX").len(), 1);
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let table = EventTable::new().with_event("VKTX", event("Sep", Polarity::Positive));
        assert!(table.events_for("vktx").is_empty());
    }

    #[test]
    fn test_event_in_period_returns_first_match() {
        let mut table = EventTable::new();
        table.insert("LLY", event("Aug", Polarity::Positive));
        table.insert("LLY", event("Dec", Polarity::Negative));

        let found = table.event_in_period("LLY", "Dec").unwrap();
        assert_eq!(found.polarity, Polarity::Negative);
        assert!(table.event_in_period("LLY", "Oct").is_none());
    }

    #[test]
    fn test_validate_rejects_period_outside_window() {
        let table = EventTable::new().with_event("NVO", event("Mar", Polarity::Positive));
        let err = table.validate(&default_periods()).unwrap_err();
        assert!(matches!(err, TableError::UnknownPeriod { ref period, .. } if period == "Mar"));
    }

    #[test]
    fn test_validate_rejects_duplicate_period() {
        let table = EventTable::new()
            .with_event("NVO", event("Oct", Polarity::Positive))
            .with_event("NVO", event("Oct", Polarity::Negative));
        let err = table.validate(&default_periods()).unwrap_err();
        assert!(matches!(err, TableError::DuplicatePeriod { .. }));
    }

    #[test]
    fn test_same_period_on_different_tickers_is_fine() {
        let table = EventTable::new()
            .with_event("NVO", event("Oct", Polarity::Positive))
            .with_event("LLY", event("Oct", Polarity::Negative));
        assert!(table.validate(&default_periods()).is_ok());
        assert_eq!(table.event_count(), 2);
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "VKTX": [
                {"period": "Jul", "polarity": "negative", "description": "a", "impact_note": "b"},
                {"period": "Sep", "polarity": "positive", "description": "c", "impact_note": "d",
                 "source": {"label": "Company PR", "url": "https://example.com"}}
            ]
        }"#;
        let table = EventTable::from_json_str(json).unwrap();
        let events = table.events_for("VKTX");
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].source.as_ref().unwrap().label, "Company PR");
    }

    #[test]
    fn test_from_toml_str() {
        let toml = r#"
            [[PFE]]
            period = "Nov"
            polarity = "positive"
            description = "Deal closes"
            impact_note = "Market entry"
        "#;
        let table = EventTable::from_toml_str(toml).unwrap();
        assert_eq!(table.events_for("PFE")[0].period, "Nov");
    }

    #[test]
    fn test_from_json_str_validates() {
        let json = r#"{"PFE": [{"period": "May", "polarity": "positive", "description": "", "impact_note": ""}]}"#;
        assert!(matches!(
            EventTable::from_json_str(json),
            Err(TableError::UnknownPeriod { .. })
        ));
    }
}
