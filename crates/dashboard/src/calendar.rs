//! Catalyst calendar helpers.

use chrono::NaiveDate;

/// Whole days from `today` until `target`; negative once the date has passed.
pub fn days_until(target: NaiveDate, today: NaiveDate) -> i64 {
    (target - today).num_days()
}
