//! Generated chart samples.

use serde::{Deserialize, Serialize};

use crate::catalyst::CatalystEvent;
use crate::ids::PeriodLabel;

/// One sample of a synthetic price series.
///
/// Consumers plot `fine_label` on the x-axis, `price` on the y-axis, and
/// highlight samples where `is_inflection` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Coarse period this sample falls in.
    pub period_label: PeriodLabel,
    /// Period plus day-of-period, e.g. "Sep 15".
    pub fine_label: String,
    /// Price rounded to cents (the final sample carries the exact end price).
    pub price: f64,
    /// True only for the sample carrying an event shock.
    pub is_inflection: bool,
    /// The event behind the shock, present iff `is_inflection`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attached_event: Option<CatalystEvent>,
}

impl SeriesPoint {
    /// Format the fine-grained label for a period and day.
    pub fn fine_label_for(period: &str, day: u32) -> String {
        format!("{period} {day}")
    }
}
