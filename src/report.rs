//! Summary of a wrapping run.

use crate::error::{Error, Result};
use crate::wrap::{BoundaryMode, WrapOutcome};
use serde::Serialize;

/// JSON output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Outcome for one layout card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutReport {
    /// Layout id
    pub id: String,

    /// Classes given to the content container
    pub classes: String,

    /// What happened to the card
    pub outcome: WrapOutcome,
}

/// Result of a run over all targets.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WrapReport {
    /// Boundary mode used for the run
    pub boundary: BoundaryMode,

    /// Per-layout outcomes, in processing order
    pub layouts: Vec<LayoutReport>,

    /// Document size before the run, in bytes
    pub bytes_before: usize,

    /// Document size after the run, in bytes
    pub bytes_after: usize,
}

impl WrapReport {
    /// Create an empty report.
    pub fn new(boundary: BoundaryMode) -> Self {
        Self {
            boundary,
            ..Self::default()
        }
    }

    /// Record the outcome for one layout.
    pub fn record(&mut self, id: &str, classes: &str, outcome: WrapOutcome) {
        self.layouts.push(LayoutReport {
            id: id.to_string(),
            classes: classes.to_string(),
            outcome,
        });
    }

    /// Number of layouts with the given outcome.
    pub fn count(&self, outcome: WrapOutcome) -> usize {
        self.layouts.iter().filter(|l| l.outcome == outcome).count()
    }

    /// Number of layouts wrapped during the run.
    pub fn wrapped_count(&self) -> usize {
        self.count(WrapOutcome::Wrapped)
    }

    /// Whether any layout was wrapped.
    pub fn is_changed(&self) -> bool {
        self.layouts.iter().any(|l| l.outcome.is_changed())
    }

    /// Outcome for a layout id, if it was part of the run.
    pub fn outcome_of(&self, id: &str) -> Option<WrapOutcome> {
        self.layouts.iter().find(|l| l.id == id).map(|l| l.outcome)
    }

    /// Serialize the report.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        let result = match format {
            JsonFormat::Pretty => serde_json::to_string_pretty(self),
            JsonFormat::Compact => serde_json::to_string(self),
        };

        result.map_err(|e| Error::Report(format!("JSON serialization error: {}", e)))
    }
}
