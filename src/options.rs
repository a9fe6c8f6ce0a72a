//! Run configuration.

use crate::error::Result;
use crate::layout::{default_targets, LayoutTarget};
use crate::wrap::BoundaryMode;

/// Options for a wrapping run.
#[derive(Debug, Clone)]
pub struct WrapOptions {
    /// Layout cards to wrap, in processing order
    pub targets: Vec<LayoutTarget>,

    /// How block ends are located
    pub boundary: BoundaryMode,
}

impl WrapOptions {
    /// Create options targeting the default layouts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the target list.
    pub fn with_targets(mut self, targets: Vec<LayoutTarget>) -> Self {
        self.targets = targets;
        self
    }

    /// Replace the target list with layouts named by id, using the standard
    /// class mapping.
    pub fn with_layout_ids<I, S>(mut self, ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.targets = ids
            .into_iter()
            .map(LayoutTarget::new)
            .collect::<Result<Vec<_>>>()?;
        Ok(self)
    }

    /// Set the boundary mode.
    pub fn with_boundary(mut self, boundary: BoundaryMode) -> Self {
        self.boundary = boundary;
        self
    }

    /// Locate block ends by tag balancing.
    pub fn balanced(mut self) -> Self {
        self.boundary = BoundaryMode::Balanced;
        self
    }
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            targets: default_targets(),
            boundary: BoundaryMode::Heuristic,
        }
    }
}
