//! Catalyst events attached to a ticker.
//!
//! A catalyst is a hand-authored occurrence (earnings, trial readout,
//! acquisition) pinned to one coarse period. Its [`Polarity`] decides the
//! direction of the price shock injected into a synthetic series.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::PeriodLabel;

// =============================================================================
// Polarity
// =============================================================================

/// Direction of a catalyst's price impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    /// `+1.0` for positive, `-1.0` for negative.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Polarity::Positive => 1.0,
            Polarity::Negative => -1.0,
        }
    }

    /// Pick between two values by polarity.
    #[inline]
    pub fn select<T>(self, positive: T, negative: T) -> T {
        match self {
            Polarity::Positive => positive,
            Polarity::Negative => negative,
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Positive => write!(f, "positive"),
            Polarity::Negative => write!(f, "negative"),
        }
    }
}

// =============================================================================
// Citation
// =============================================================================

/// Optional source reference shown in a chart tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

// =============================================================================
// CatalystEvent
// =============================================================================

/// A named occurrence tied to one ticker and one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalystEvent {
    /// Period the event falls in; must be one of the chart window labels.
    pub period: PeriodLabel,
    /// Direction of the injected shock.
    pub polarity: Polarity,
    /// What happened.
    pub description: String,
    /// Why it mattered to the price.
    pub impact_note: String,
    /// Where the information came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Citation>,
}

impl CatalystEvent {
    /// Create an event without a citation.
    pub fn new(
        period: impl Into<PeriodLabel>,
        polarity: Polarity,
        description: impl Into<String>,
        impact_note: impl Into<String>,
    ) -> Self {
        Self {
            period: period.into(),
            polarity,
            description: description.into(),
            impact_note: impact_note.into(),
            source: None,
        }
    }

    /// Attach a citation.
    pub fn with_source(mut self, label: impl Into<String>, url: Option<&str>) -> Self {
        self.source = Some(Citation {
            label: label.into(),
            url: url.map(str::to_string),
        });
        self
    }

    pub fn is_positive(&self) -> bool {
        self.polarity == Polarity::Positive
    }
}
