//! Layout identifiers and their content class mapping.

use crate::error::{Error, Result};
use serde::Serialize;

/// Layout cards wrapped by a default run, in processing order.
pub const DEFAULT_LAYOUTS: [&str; 15] = [
    "feature-layout",
    "masonry-layout",
    "dashboard-layout",
    "split-layout",
    "image-text-layout",
    "text-image-layout",
    "two-columns-layout",
    "two-columns-headings-layout",
    "three-columns-layout",
    "three-columns-headings-layout",
    "four-columns-layout",
    "title-bullets-layout",
    "title-bullets-image-layout",
    "hero-layout",
    "hero-overlay",
];

/// Classes applied to the content container of `id`, after
/// `card-content-scrollable`.
///
/// The overlay hero variant shares the hero styles, so `hero-overlay` maps
/// to `hero-layout overlay`. Every other layout uses its own id.
///
/// # Example
///
/// ```
/// use layout_wrap::layout::layout_classes;
///
/// assert_eq!(layout_classes("hero-overlay"), "hero-layout overlay");
/// assert_eq!(layout_classes("split-layout"), "split-layout");
/// ```
pub fn layout_classes(id: &str) -> String {
    match id {
        "hero-overlay" => "hero-layout overlay".to_string(),
        other => other.to_string(),
    }
}

/// A layout card to wrap: the element id and the classes for its content
/// container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutTarget {
    id: String,
    classes: String,
}

impl LayoutTarget {
    /// Create a target whose classes follow [`layout_classes`].
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let classes = layout_classes(&id);
        Self::with_classes(id, classes)
    }

    /// Create a target with an explicit class list.
    pub fn with_classes(id: impl Into<String>, classes: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let classes = classes.into();

        if id.is_empty()
            || id
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '"' | '<' | '>'))
        {
            return Err(Error::InvalidLayoutId(id));
        }
        if classes.trim().is_empty() {
            return Err(Error::InvalidClasses(id));
        }

        Ok(Self { id, classes })
    }

    /// The `id` attribute value of the layout card.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Space-separated classes for the content container.
    pub fn classes(&self) -> &str {
        &self.classes
    }
}

/// Targets for every entry of [`DEFAULT_LAYOUTS`].
pub fn default_targets() -> Vec<LayoutTarget> {
    DEFAULT_LAYOUTS
        .iter()
        .map(|id| LayoutTarget {
            id: (*id).to_string(),
            classes: layout_classes(id),
        })
        .collect()
}
