//! Wrapping a single layout card.
//!
//! [`wrap_block`] is the per-layout step of a run: it locates the card's
//! block, leaves it alone when it already carries the shared containers, and
//! otherwise rewrites it with [`template::render_wrapped`].
//!
//! # Example
//!
//! ```
//! use layout_wrap::wrap::{wrap_block, BoundaryMode, WrapOutcome};
//! use layout_wrap::LayoutTarget;
//!
//! let doc = "<div id=\"split-layout\" class=\"layout-card\">\n  <p>Hi</p>\n</div>\n<!-- end -->\n";
//! let target = LayoutTarget::new("split-layout").unwrap();
//!
//! let (wrapped, outcome) = wrap_block(doc, &target, BoundaryMode::Heuristic);
//! assert_eq!(outcome, WrapOutcome::Wrapped);
//! assert!(wrapped.contains("card-content-scrollable split-layout"));
//!
//! let (again, outcome) = wrap_block(&wrapped, &target, BoundaryMode::Heuristic);
//! assert_eq!(outcome, WrapOutcome::AlreadyWrapped);
//! assert_eq!(again, wrapped);
//! ```

mod boundary;
pub mod template;

pub use boundary::{BlockLocator, BlockSpan, BoundaryMode};
pub use template::{render_wrapped, CONTENT_CLASS, SENTINEL_CLASS};

use crate::layout::LayoutTarget;
use serde::{Deserialize, Serialize};

/// What happened to one layout card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapOutcome {
    /// The shared containers were inserted.
    Wrapped,
    /// The card already carried the shared containers.
    AlreadyWrapped,
    /// No block for the layout was found.
    NotFound,
}

impl WrapOutcome {
    /// Whether the document was modified.
    pub fn is_changed(&self) -> bool {
        matches!(self, WrapOutcome::Wrapped)
    }
}

impl std::fmt::Display for WrapOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            WrapOutcome::Wrapped => "wrapped",
            WrapOutcome::AlreadyWrapped => "already wrapped",
            WrapOutcome::NotFound => "not found",
        };
        f.write_str(label)
    }
}

/// Wrap the first block of `target` in `document`.
///
/// Returns the new document and the outcome. When the outcome is anything
/// but [`WrapOutcome::Wrapped`], the returned text equals `document`.
pub fn wrap_block(
    document: &str,
    target: &LayoutTarget,
    mode: BoundaryMode,
) -> (String, WrapOutcome) {
    let locator = BlockLocator::new(target.id(), mode);

    let Some(span) = locator.locate(document) else {
        return (document.to_string(), WrapOutcome::NotFound);
    };

    let inner = &document[span.inner.clone()];
    if inner.contains(SENTINEL_CLASS) {
        return (document.to_string(), WrapOutcome::AlreadyWrapped);
    }

    let wrapped = render_wrapped(
        target,
        &document[span.opening.clone()],
        inner,
        &document[span.closing.clone()],
    );

    let full = span.full();
    let mut out = String::with_capacity(document.len() + wrapped.len() - full.len());
    out.push_str(&document[..full.start]);
    out.push_str(&wrapped);
    out.push_str(&document[full.end..]);

    (out, WrapOutcome::Wrapped)
}
