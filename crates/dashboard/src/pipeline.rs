//! Drug-pipeline filtering.

use serde::{Deserialize, Serialize};
use types::{Mechanism, PipelineEntry, Route};

/// Filter over pipeline entries. A `None` field matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineFilter {
    pub route: Option<Route>,
    pub mechanism: Option<Mechanism>,
    /// Exact stage label, e.g. "Phase 3".
    pub stage: Option<String>,
}

impl PipelineFilter {
    /// A filter that matches every entry.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_route(mut self, route: Route) -> Self {
        self.route = Some(route);
        self
    }

    pub fn with_mechanism(mut self, mechanism: Mechanism) -> Self {
        self.mechanism = Some(mechanism);
        self
    }

    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = Some(stage.into());
        self
    }

    /// Back to matching everything.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, entry: &PipelineEntry) -> bool {
        self.route.is_none_or(|r| entry.route == r)
            && self.mechanism.is_none_or(|m| entry.mechanism == m)
            && self.stage.as_deref().is_none_or(|s| entry.stage == s)
    }

    /// Entries passing the filter, in input order.
    pub fn apply<'a>(&self, entries: &'a [PipelineEntry]) -> Vec<&'a PipelineEntry> {
        entries.iter().filter(|e| self.matches(e)).collect()
    }
}

/// Distinct stage labels in first-seen order.
pub fn unique_stages(entries: &[PipelineEntry]) -> Vec<&str> {
    let mut stages: Vec<&str> = Vec::new();
    for entry in entries {
        if !stages.contains(&entry.stage.as_str()) {
            stages.push(&entry.stage);
        }
    }
    stages
}
