//! Integration tests for wrapping layout cards.

use layout_wrap::wrap::{BoundaryMode, SENTINEL_CLASS};
use layout_wrap::{
    run_file, run_file_to, wrap_block, wrap_str, Error, LayoutTarget, Transformer, WrapOptions,
    WrapOutcome, DEFAULT_LAYOUTS,
};

const DASHBOARD_BLOCK: &str = "  <div id=\"dashboard-layout\" class=\"layout-card\" data-layout=\"dashboard\">\n    <div class=\"layout-card-with-components\">\n      <div class=\"shared-header-container\" data-card-id=\"dashboard-layout\"></div>\n      <div class=\"card-content-scrollable dashboard-layout\">\n        <p>Gamma</p>\n      </div>\n      <div class=\"shared-footer-container\" data-card-id=\"dashboard-layout\"></div>\n    </div>\n  </div>\n";

fn create_sample_document() -> String {
    let mut doc = String::new();
    doc.push_str("<!DOCTYPE html>\n<html>\n<body>\n<div class=\"layout-grid\">\n");

    doc.push_str("  <!-- Feature -->\n");
    doc.push_str("  <div id=\"feature-layout\" class=\"layout-card\" data-layout=\"feature\">\n");
    doc.push_str("    <h2>Feature</h2>\n    <p>Alpha</p>\n");
    doc.push_str("  </div>\n\n");

    doc.push_str("  <!-- Masonry -->\n");
    doc.push_str("  <div id=\"masonry-layout\" class=\"layout-card\" data-layout=\"masonry\">\n");
    doc.push_str("    <p>Beta</p>\n");
    doc.push_str("  </div>\n\n");

    doc.push_str("  <!-- Dashboard -->\n");
    doc.push_str(DASHBOARD_BLOCK);

    doc.push_str("</div>\n</body>\n</html>\n");
    doc
}

#[test]
fn test_full_run_scenario() {
    let doc = create_sample_document();
    let (out, report) = Transformer::default().transform(&doc);

    assert_eq!(report.outcome_of("feature-layout"), Some(WrapOutcome::Wrapped));
    assert_eq!(report.outcome_of("masonry-layout"), Some(WrapOutcome::Wrapped));
    assert_eq!(
        report.outcome_of("dashboard-layout"),
        Some(WrapOutcome::AlreadyWrapped)
    );
    assert_eq!(report.wrapped_count(), 2);
    assert_eq!(report.count(WrapOutcome::NotFound), 12);

    for id in ["feature-layout", "masonry-layout"] {
        let marker = format!("data-card-id=\"{}\"", id);
        assert_eq!(out.matches(&marker).count(), 2, "{}", id);
        assert_eq!(
            out.matches(&format!("<div class=\"shared-header-container\" {}>", marker))
                .count(),
            1
        );
        assert_eq!(
            out.matches(&format!("<div class=\"shared-footer-container\" {}>", marker))
                .count(),
            1
        );
        assert!(out.contains(&format!("<div class=\"card-content-scrollable {}\">", id)));
    }

    assert!(out.contains(
        "<div class=\"card-content-scrollable feature-layout\">\n\n    <h2>Feature</h2>\n    <p>Alpha</p>\n  \n"
    ));
    assert!(out.contains("<div class=\"card-content-scrollable masonry-layout\">\n\n    <p>Beta</p>\n  \n"));

    // Already wrapped card is untouched, and so is everything after it.
    assert!(out.ends_with(&format!(
        "  <!-- Dashboard -->\n{}</div>\n</body>\n</html>\n",
        DASHBOARD_BLOCK
    )));
    assert_eq!(out.matches(SENTINEL_CLASS).count(), 3);
}

#[test]
fn test_full_run_is_idempotent() {
    let doc = create_sample_document();
    let once = wrap_str(&doc);
    let (twice, report) = Transformer::default().transform(&once);

    assert_eq!(once, twice);
    assert!(!report.is_changed());
}

#[test]
fn test_permutations_agree() {
    let doc = create_sample_document();

    let forward: Vec<_> = DEFAULT_LAYOUTS.iter().copied().collect();
    let mut reverse = forward.clone();
    reverse.reverse();
    let mut rotated = forward.clone();
    rotated.rotate_left(5);

    let results: Vec<String> = [forward, reverse, rotated]
        .into_iter()
        .map(|ids| {
            let options = WrapOptions::new().with_layout_ids(ids).unwrap();
            Transformer::new(options).transform(&doc).0
        })
        .collect();

    assert_eq!(results[0], results[1]);
    assert_eq!(results[0], results[2]);
}

#[test]
fn test_absent_layout_leaves_bytes() {
    let doc = "<div id=\"other\" class=\"x\">\n  é ü ✓\n</div>\n<!-- end -->\n";
    for id in DEFAULT_LAYOUTS {
        let target = LayoutTarget::new(id).unwrap();
        let (out, outcome) = wrap_block(doc, &target, BoundaryMode::Heuristic);
        assert_eq!(outcome, WrapOutcome::NotFound);
        assert_eq!(out.as_bytes(), doc.as_bytes());
    }
}

#[test]
fn test_inner_content_preserved_verbatim() {
    let inner = "\n\t<p class=\"a\">  spaced   &lt;text&gt;  </p>\r\n    <img src=\"x.png\">\n  ";
    let doc = format!(
        "<div id=\"split-layout\" class=\"layout-card\">{}</div>\n<!-- next -->\n",
        inner
    );
    let target = LayoutTarget::new("split-layout").unwrap();
    let (out, outcome) = wrap_block(&doc, &target, BoundaryMode::Heuristic);

    assert_eq!(outcome, WrapOutcome::Wrapped);
    assert!(out.contains(&format!(
        "<div class=\"card-content-scrollable split-layout\">\n{}\n              </div>",
        inner
    )));
}

#[test]
fn test_run_file_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.html");
    std::fs::write(&path, create_sample_document()).unwrap();

    let report = run_file(&path, WrapOptions::default()).unwrap();
    assert_eq!(report.wrapped_count(), 2);

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, wrap_str(&create_sample_document()));

    // A second run rewrites the file with identical content.
    let report = run_file(&path, WrapOptions::default()).unwrap();
    assert_eq!(report.wrapped_count(), 0);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), written);
}

#[test]
fn test_run_file_to_other_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("index.html");
    let output = dir.path().join("wrapped.html");
    let doc = create_sample_document();
    std::fs::write(&input, &doc).unwrap();

    run_file_to(&input, &output, WrapOptions::default()).unwrap();

    assert_eq!(std::fs::read_to_string(&input).unwrap(), doc);
    assert_eq!(std::fs::read_to_string(&output).unwrap(), wrap_str(&doc));
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.html");

    let result = run_file(&path, WrapOptions::default());
    assert!(matches!(result, Err(Error::InputNotFound(_))));
    assert!(!path.exists());
}

#[test]
fn test_balanced_mode_full_run() {
    let doc = create_sample_document();
    let options = WrapOptions::new().balanced();
    let (out, report) = Transformer::new(options).transform(&doc);

    assert_eq!(report.wrapped_count(), 2);
    assert_eq!(
        report.outcome_of("dashboard-layout"),
        Some(WrapOutcome::AlreadyWrapped)
    );
    assert!(out.contains(DASHBOARD_BLOCK));
}
