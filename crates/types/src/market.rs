//! Dashboard data types.
//!
//! Quotes, drug-pipeline entries, intelligence items and calendar
//! milestones. These are plain records; the analytics over them live in the
//! `dashboard` crate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ids::Symbol;

// =============================================================================
// Quote
// =============================================================================

/// Latest market snapshot for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub ticker: Symbol,
    pub company: String,
    pub price: f64,
    /// Absolute change since previous close.
    pub change: f64,
    /// Percentage change since previous close (e.g. 1.20 = +1.2%).
    pub change_percent: f64,
    /// Pre-formatted market capitalisation, e.g. "3.61B".
    pub market_cap: String,
    /// Sentiment score in `[0, 1]`.
    pub sentiment: f64,
}

impl Quote {
    pub fn is_gainer(&self) -> bool {
        self.change_percent > 0.0
    }

    pub fn is_loser(&self) -> bool {
        self.change_percent < 0.0
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// Route of administration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    #[serde(alias = "Oral")]
    Oral,
    #[serde(alias = "Injection")]
    Injection,
}

/// Receptor-targeting mechanism.
///
/// Deserializes from its lowercase name or from a receptor target count
/// (1 = mono, 2 = dual, 3 = triple).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "MechanismRepr")]
pub enum Mechanism {
    Mono,
    Dual,
    Triple,
    Novel,
}

/// Regulatory / development status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrialStatus {
    Approved,
    Pending,
    Ongoing,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Oral => write!(f, "Oral"),
            Route::Injection => write!(f, "Injection"),
        }
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "oral" => Ok(Route::Oral),
            "injection" => Ok(Route::Injection),
            other => Err(format!("unknown route '{other}' (expected oral|injection)")),
        }
    }
}

impl fmt::Display for Mechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mechanism::Mono => write!(f, "Mono-agonist"),
            Mechanism::Dual => write!(f, "Dual-agonist"),
            Mechanism::Triple => write!(f, "Triple-agonist"),
            Mechanism::Novel => write!(f, "Novel"),
        }
    }
}

impl FromStr for Mechanism {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mono" => Ok(Mechanism::Mono),
            "dual" => Ok(Mechanism::Dual),
            "triple" => Ok(Mechanism::Triple),
            "novel" => Ok(Mechanism::Novel),
            other => Err(format!(
                "unknown mechanism '{other}' (expected mono|dual|triple|novel)"
            )),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MechanismRepr {
    Targets(u8),
    Name(String),
}

impl TryFrom<MechanismRepr> for Mechanism {
    type Error = String;

    fn try_from(repr: MechanismRepr) -> Result<Self, Self::Error> {
        match repr {
            MechanismRepr::Targets(1) => Ok(Mechanism::Mono),
            MechanismRepr::Targets(2) => Ok(Mechanism::Dual),
            MechanismRepr::Targets(3) => Ok(Mechanism::Triple),
            MechanismRepr::Targets(n) => Err(format!("unsupported target count {n}")),
            MechanismRepr::Name(name) => name.parse(),
        }
    }
}

impl fmt::Display for TrialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrialStatus::Approved => write!(f, "approved"),
            TrialStatus::Pending => write!(f, "pending"),
            TrialStatus::Ongoing => write!(f, "ongoing"),
        }
    }
}

/// One drug program in the competitive pipeline.
///
/// Also reads the dashboard's own field names: `type` for the route,
/// `targetCount` for the mechanism and `weightLoss` as a `"12.4%"` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineEntry {
    pub company: String,
    pub drug: String,
    #[serde(alias = "type")]
    pub route: Route,
    pub molecule: String,
    #[serde(alias = "targetCount")]
    pub mechanism: Mechanism,
    /// Dosing frequency, e.g. "Weekly".
    pub frequency: String,
    /// Mean weight loss in percent; `None` while not yet reported.
    #[serde(default, alias = "weightLoss", deserialize_with = "weight_loss::deserialize")]
    pub weight_loss_pct: Option<f64>,
    /// Trial duration, e.g. "52 weeks".
    pub duration: String,
    /// Free-form stage label, e.g. "Phase 3".
    pub stage: String,
    pub status: TrialStatus,
    #[serde(default)]
    pub notes: String,
}

mod weight_loss {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Pct(f64),
        Text(String),
    }

    /// Accepts a number, a `"12.4%"` string, or a placeholder like `"TBD"`
    /// (read as not reported).
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Repr>::deserialize(deserializer)? {
            Some(Repr::Pct(pct)) => Some(pct),
            Some(Repr::Text(text)) => text.trim().trim_end_matches('%').trim().parse().ok(),
            None => None,
        })
    }
}

// =============================================================================
// Intelligence
// =============================================================================

/// Editorial priority of an intelligence item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Medium,
    High,
    Critical,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
            Priority::Critical => write!(f, "critical"),
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "critical" => Ok(Priority::Critical),
            other => Err(format!(
                "unknown priority '{other}' (expected medium|high|critical)"
            )),
        }
    }
}

/// A news-style intelligence item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntelItem {
    pub date: NaiveDate,
    pub source: String,
    pub priority: Priority,
    pub headline: String,
    pub summary: String,
    /// Ticker the item concerns, or "Multiple".
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

// =============================================================================
// Milestone
// =============================================================================

/// A scheduled catalyst on the calendar, dated coarsely ("Q2 2026").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub when: String,
    pub event: String,
    pub description: String,
    #[serde(default)]
    pub critical: bool,
}

impl Milestone {
    pub fn new(when: &str, event: &str, description: &str) -> Self {
        Self {
            when: when.to_string(),
            event: event.to_string(),
            description: description.to_string(),
            critical: false,
        }
    }

    pub fn critical(mut self) -> Self {
        self.critical = true;
        self
    }
}
