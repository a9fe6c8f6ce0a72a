//! # layout-wrap
//!
//! Wraps the layout preview cards of a static HTML page with the shared
//! header, content and footer containers.
//!
//! Each card is a `<div id="...">` block. Wrapping keeps the card's opening
//! and closing tags, and moves its original markup into a scrollable content
//! container placed between a header placeholder and a footer placeholder:
//!
//! ```html
//! <div id="split-layout" class="layout-card">
//!   <div class="layout-card-with-components">
//!     <div class="shared-header-container" data-card-id="split-layout"></div>
//!     <div class="card-content-scrollable split-layout">
//!       ...original markup...
//!     </div>
//!     <div class="shared-footer-container" data-card-id="split-layout"></div>
//!   </div>
//! </div>
//! ```
//!
//! Cards that already contain `layout-card-with-components` are left as they
//! are, so running twice is the same as running once.
//!
//! ## Quick Start
//!
//! ```no_run
//! use layout_wrap::{run_file, WrapOptions};
//!
//! fn main() -> layout_wrap::Result<()> {
//!     let report = run_file("index.html", WrapOptions::default())?;
//!     println!("{} layouts wrapped", report.wrapped_count());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod layout;
pub mod options;
pub mod report;
pub mod transform;
pub mod wrap;

// Re-export commonly used types
pub use error::{Error, Result};
pub use layout::{default_targets, layout_classes, LayoutTarget, DEFAULT_LAYOUTS};
pub use options::WrapOptions;
pub use report::{JsonFormat, LayoutReport, WrapReport};
pub use transform::{
    read_document, run_file, run_file_to, run_file_with_progress, write_document, ProgressEvent,
    Transformer,
};
pub use wrap::{wrap_block, BoundaryMode, WrapOutcome};

/// Document file rewritten by a default run.
pub const DEFAULT_DOCUMENT: &str = "index.html";

/// Wrap the default layouts in an in-memory document.
///
/// # Example
///
/// ```
/// let doc = "<div id=\"hero-overlay\" class=\"layout-card\">\n  <h1>Hi</h1>\n</div>\n</div>\n";
/// let wrapped = layout_wrap::wrap_str(doc);
/// assert!(wrapped.contains("card-content-scrollable hero-layout overlay"));
/// ```
pub fn wrap_str(document: &str) -> String {
    Transformer::default().transform(document).0
}

/// Wrap the layouts of an in-memory document with custom options.
pub fn wrap_str_with_options(document: &str, options: WrapOptions) -> (String, WrapReport) {
    Transformer::new(options).transform(document)
}
