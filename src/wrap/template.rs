//! Markup inserted around a layout card's content.

use crate::layout::LayoutTarget;

/// Class marking a card that already carries the shared containers.
pub const SENTINEL_CLASS: &str = "layout-card-with-components";

/// Class prefixed to every content container.
pub const CONTENT_CLASS: &str = "card-content-scrollable";

/// Render the wrapped block.
///
/// `opening` and `closing` are copied unchanged; `inner` is placed verbatim
/// inside the content container, between the header and footer
/// placeholders.
pub fn render_wrapped(
    target: &LayoutTarget,
    opening: &str,
    inner: &str,
    closing: &str,
) -> String {
    let id = target.id();
    let classes = target.classes();

    let mut out = String::with_capacity(opening.len() + inner.len() + closing.len() + 512);
    out.push_str(opening);
    out.push('\n');
    out.push_str(&format!("            <div class=\"{SENTINEL_CLASS}\">\n"));
    out.push_str(&format!(
        "              <div class=\"shared-header-container\" data-card-id=\"{id}\"></div>\n"
    ));
    out.push_str(&format!("              <div class=\"{CONTENT_CLASS} {classes}\">\n"));
    out.push_str(inner);
    out.push('\n');
    out.push_str("              </div>\n");
    out.push_str(&format!(
        "              <div class=\"shared-footer-container\" data-card-id=\"{id}\"></div>\n"
    ));
    out.push_str("            </div>\n");
    out.push_str("          ");
    out.push_str(closing);
    out
}
