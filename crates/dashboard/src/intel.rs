//! Intelligence-feed classification.
//!
//! Keyword rules used when turning raw headlines into feed items: a
//! priority bucket and the ticker the story is about.

use types::{IntelItem, Priority};

const CRITICAL_KEYWORDS: [&str; 4] = [
    "fda approval",
    "phase 3 results",
    "acquisition",
    "breakthrough",
];

const HIGH_KEYWORDS: [&str; 4] = ["phase 2", "clinical trial", "partnership", "data readout"];

/// Company name fragments and the ticker they map to. Checked in order.
const COMPANY_TICKERS: [(&str, &str); 9] = [
    ("lilly", "LLY"),
    ("eli lilly", "LLY"),
    ("novo", "NVO"),
    ("novo nordisk", "NVO"),
    ("viking", "VKTX"),
    ("amgen", "AMGN"),
    ("roche", "RHHBY"),
    ("pfizer", "PFE"),
    ("metsera", "PFE"),
];

/// Ticker used when no single company is identified.
pub const MULTIPLE: &str = "Multiple";

/// Priority of a story from its headline and summary text.
pub fn classify_priority(text: &str) -> Priority {
    let lower = text.to_lowercase();
    if CRITICAL_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        Priority::Critical
    } else if HIGH_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        Priority::High
    } else {
        Priority::Medium
    }
}

/// Ticker of the first company mentioned, or [`MULTIPLE`].
pub fn extract_company(text: &str) -> &'static str {
    let lower = text.to_lowercase();
    COMPANY_TICKERS
        .iter()
        .find(|(name, _)| lower.contains(name))
        .map(|(_, ticker)| *ticker)
        .unwrap_or(MULTIPLE)
}

/// The `n` most recent items, newest first. Ties keep their input order.
pub fn latest(items: &[IntelItem], n: usize) -> Vec<&IntelItem> {
    let mut sorted: Vec<&IntelItem> = items.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(n);
    sorted
}

/// Items at or above `min` priority, in input order.
pub fn at_least(items: &[IntelItem], min: Priority) -> Vec<&IntelItem> {
    items.iter().filter(|i| i.priority >= min).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn item(date: (i32, u32, u32), priority: Priority, headline: &str) -> IntelItem {
        IntelItem {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            source: "Test".to_string(),
            priority,
            headline: headline.to_string(),
            summary: String::new(),
            company: MULTIPLE.to_string(),
            impact: None,
            link: None,
        }
    }

    #[test]
    fn test_classify_priority() {
        assert_eq!(
            classify_priority("Pfizer completes Metsera ACQUISITION"),
            Priority::Critical
        );
        assert_eq!(
            classify_priority("Viking: VENTURE Phase 2 Published"),
            Priority::High
        );
        assert_eq!(classify_priority("Analyst day recap"), Priority::Medium);
    }

    #[test]
    fn test_critical_beats_high() {
        assert_eq!(
            classify_priority("Phase 2 partner wins FDA approval"),
            Priority::Critical
        );
    }

    #[test]
    fn test_extract_company() {
        assert_eq!(extract_company("Eli Lilly files orforglipron"), "LLY");
        assert_eq!(extract_company("Metsera board accepts offer"), "PFE");
        assert_eq!(extract_company("Roche commits $700M"), "RHHBY");
        assert_eq!(extract_company("2026: Year of Obesity Pills"), MULTIPLE);
    }

    #[test]
    fn test_latest_sorts_newest_first() {
        let items = vec![
            item((2025, 11, 13), Priority::Critical, "old"),
            item((2026, 1, 12), Priority::High, "new"),
            item((2026, 1, 9), Priority::High, "mid"),
        ];
        let headlines: Vec<_> = latest(&items, 2).iter().map(|i| i.headline.as_str()).collect();
        assert_eq!(headlines, vec!["new", "mid"]);
    }

    #[test]
    fn test_at_least_priority() {
        let items = vec![
            item((2025, 11, 13), Priority::Critical, "a"),
            item((2026, 1, 12), Priority::Medium, "b"),
            item((2026, 1, 9), Priority::High, "c"),
        ];
        assert_eq!(at_least(&items, Priority::High).len(), 2);
        assert_eq!(at_least(&items, Priority::Medium).len(), 3);
    }
}
