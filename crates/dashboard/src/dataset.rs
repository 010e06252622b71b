//! Dashboard dataset: quotes, pipeline, feed and calendar.
//!
//! The bundled [`DashboardData::builtin`] snapshot mirrors the dashboard's
//! static defaults. A JSON file with the same shape can replace it.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use types::{
    IntelItem, Mechanism, Milestone, PipelineEntry, Priority, Quote, Route, TrialStatus,
};

use crate::market::MarketStatistics;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to read dashboard data: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid dashboard data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything the dashboard displays besides the generated chart.
///
/// The file format uses camelCase keys (`marketData`, `intelligenceFeed`,
/// ...), matching the dashboard's `dashboard_data.json`. Unknown keys such as
/// `lastUpdate` or `statistics` are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    #[serde(default)]
    pub market_data: Vec<Quote>,
    #[serde(default)]
    pub intelligence_feed: Vec<IntelItem>,
    #[serde(default)]
    pub pipeline: Vec<PipelineEntry>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    /// Date of the headline FDA decision the countdown tracks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fda_decision_date: Option<NaiveDate>,
}

impl DashboardData {
    /// Quote for `ticker`, exact match.
    pub fn quote(&self, ticker: &str) -> Option<&Quote> {
        self.market_data.iter().find(|q| q.ticker == ticker)
    }

    pub fn statistics(&self) -> Option<MarketStatistics> {
        MarketStatistics::from_quotes(&self.market_data)
    }

    pub fn from_json_str(s: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let data = Self::from_json_str(&std::fs::read_to_string(path)?)?;
        debug!(
            path = %path.display(),
            quotes = data.market_data.len(),
            pipeline = data.pipeline.len(),
            feed = data.intelligence_feed.len(),
            "loaded dashboard data"
        );
        Ok(data)
    }

    /// The bundled default snapshot.
    pub fn builtin() -> Self {
        Self {
            market_data: vec![
                quote("LLY", "Eli Lilly", 1073.29, -3.90, -0.36, "962.2B", 0.85),
                quote("NVO", "Novo Nordisk", 59.45, 0.64, 1.09, "261.3B", 0.68),
                quote("VKTX", "Viking Therapeutics", 32.03, 0.38, 1.20, "3.61B", 0.72),
                quote("AMGN", "Amgen", 289.45, -2.10, -0.72, "154.8B", 0.75),
                quote("RHHBY", "Roche", 38.20, 0.55, 1.46, "240.5B", 0.70),
                quote("PFE", "Pfizer", 25.80, -0.15, -0.58, "145.2B", 0.65),
            ],
            intelligence_feed: vec![
                intel(
                    (2026, 1, 12),
                    "Obesity Journal",
                    Priority::High,
                    "Viking: VENTURE Phase 2 Published",
                    "VK2735 SC: 14.7% weight loss, no plateau. VANQUISH-1 over-enrolled with 4,650 patients.",
                    "VKTX",
                    "Peer-reviewed validation",
                ),
                intel(
                    (2026, 1, 10),
                    "CNBC",
                    Priority::High,
                    "2026: Year of Obesity Pills",
                    "Novo launched oral Wegovy Jan 6. Lilly orforglipron expected Q2.",
                    "Multiple",
                    "Market expansion",
                ),
                intel(
                    (2026, 1, 9),
                    "Clarivate",
                    Priority::High,
                    "Drugs to Watch: Orforglipron & Retatrutide",
                    "Lilly assets named defining drugs of next decade.",
                    "LLY",
                    "Analyst validation",
                ),
                intel(
                    (2025, 12, 16),
                    "Pfizer",
                    Priority::High,
                    "Pfizer: 15 Obesity Trials in 2026",
                    "Post-$10B Metsera acquisition, launching aggressive Phase 3 program.",
                    "PFE",
                    "Pipeline acceleration",
                ),
                intel(
                    (2025, 11, 13),
                    "M&A",
                    Priority::Critical,
                    "Pfizer Completes $10B Metsera Buy",
                    "Beat Novo in bidding war. Portfolio includes monthly GLP-1 and amylin.",
                    "PFE",
                    "Major market entry",
                ),
                intel(
                    (2025, 9, 22),
                    "Roche",
                    Priority::High,
                    "Roche: Top 3 Obesity Strategy",
                    "CEO commits to top 3 by 2030. CT-388 Phase 3 H1 2026.",
                    "RHHBY",
                    "$700M investment",
                ),
                intel(
                    (2025, 6, 23),
                    "NEJM/ADA",
                    Priority::High,
                    "Amgen MariTide: 20% Weight Loss",
                    "20% at 52 weeks, no plateau. Monthly dosing. MARITIME enrolling.",
                    "AMGN",
                    "Phase 2 validation",
                ),
            ],
            pipeline: builtin_pipeline(),
            milestones: vec![
                Milestone::new(
                    "Q1 2026",
                    "Pfizer: 15 New Trials Launch",
                    "Phase 3 for MET-097i combinations",
                ),
                Milestone::new(
                    "Mar 2026",
                    "Lilly: Orforglipron FDA Decision",
                    "Priority review voucher",
                )
                .critical(),
                Milestone::new("H1 2026", "Roche: CT-388 Phase 3 Start", "Dual GLP-1/GIP"),
                Milestone::new(
                    "Q2 2026",
                    "Lilly: Orforglipron Launch",
                    "Commercial availability",
                ),
                Milestone::new("2026", "Lilly: 7 Retatrutide Readouts", "Triple agonist data"),
                Milestone::new("Q4 2026", "Novo: CagriSema Results", "GLP-1/Amylin combo"),
            ],
            fda_decision_date: NaiveDate::from_ymd_opt(2026, 3, 31),
        }
    }
}

// =============================================================================
// Builtin helpers
// =============================================================================

fn quote(
    ticker: &str,
    company: &str,
    price: f64,
    change: f64,
    change_percent: f64,
    market_cap: &str,
    sentiment: f64,
) -> Quote {
    Quote {
        ticker: ticker.to_string(),
        company: company.to_string(),
        price,
        change,
        change_percent,
        market_cap: market_cap.to_string(),
        sentiment,
    }
}

fn intel(
    (y, m, d): (i32, u32, u32),
    source: &str,
    priority: Priority,
    headline: &str,
    summary: &str,
    company: &str,
    impact: &str,
) -> IntelItem {
    IntelItem {
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        source: source.to_string(),
        priority,
        headline: headline.to_string(),
        summary: summary.to_string(),
        company: company.to_string(),
        impact: Some(impact.to_string()),
        link: None,
    }
}

#[allow(clippy::too_many_arguments)]
fn program(
    company: &str,
    drug: &str,
    route: Route,
    molecule: &str,
    mechanism: Mechanism,
    frequency: &str,
    weight_loss_pct: Option<f64>,
    duration: &str,
    stage: &str,
    status: TrialStatus,
) -> PipelineEntry {
    PipelineEntry {
        company: company.to_string(),
        drug: drug.to_string(),
        route,
        molecule: molecule.to_string(),
        mechanism,
        frequency: frequency.to_string(),
        weight_loss_pct,
        duration: duration.to_string(),
        stage: stage.to_string(),
        status,
        notes: String::new(),
    }
}

#[rustfmt::skip]
fn builtin_pipeline() -> Vec<PipelineEntry> {
    use Mechanism::{Dual, Mono, Novel, Triple};
    use Route::{Injection, Oral};
    use TrialStatus::{Approved, Ongoing, Pending};

    vec![
        program("Eli Lilly", "Orforglipron", Oral, "GLP-1", Mono, "Daily", Some(12.4), "52 weeks", "NDA Submitted", Pending),
        program("Novo Nordisk", "Wegovy Pill", Oral, "GLP-1 (Semaglutide)", Mono, "Daily", Some(16.6), "64 weeks", "Approved", Approved),
        program("Viking", "VK2735 Oral", Oral, "GLP-1/GIP", Dual, "Daily", Some(12.2), "13 weeks", "Phase 2", Ongoing),
        program("Eli Lilly", "Zepbound", Injection, "GLP-1/GIP (Tirzepatide)", Dual, "Weekly", Some(20.9), "72 weeks", "Approved", Approved),
        program("Novo Nordisk", "Wegovy Injection", Injection, "GLP-1 (Semaglutide)", Mono, "Weekly", Some(14.9), "68 weeks", "Approved", Approved),
        program("Viking", "VK2735 SC", Injection, "GLP-1/GIP", Dual, "Weekly", Some(14.7), "13 weeks", "Phase 3", Ongoing),
        program("Eli Lilly", "Retatrutide", Injection, "GLP-1/GIP/Glucagon", Triple, "Weekly", Some(24.2), "68 weeks", "Phase 3", Ongoing),
        program("Amgen", "MariTide", Injection, "GLP-1 agonist + GIP antagonist", Novel, "Monthly", Some(20.0), "52 weeks", "Phase 3 Planned", Ongoing),
        program("Roche", "CT-388", Injection, "GLP-1/GIP (Biased signaling)", Novel, "Weekly", Some(18.8), "24 weeks", "Phase 3 Planned", Ongoing),
        program("Pfizer", "MET-097i", Injection, "GLP-1", Mono, "Weekly/Monthly", None, "TBD", "Phase 2", Ongoing),
        program("Pfizer", "MET-233i", Injection, "Amylin analog", Novel, "Monthly", None, "TBD", "Phase 1", Ongoing),
    ]
}
