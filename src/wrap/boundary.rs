//! Locating a layout card's block inside the document text.
//!
//! Blocks are found by pattern matching on the raw text rather than by
//! parsing the document, so every byte outside the located block is left
//! exactly as it was.

use regex::Regex;
use serde::Serialize;
use std::ops::Range;

const CLOSE_TAG: &str = "</div>";
const COMMENT_OPEN: &str = "<!--";

/// How the end of a layout block is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryMode {
    /// First `</div>` after the opening tag that is followed, across a line
    /// break, by a comment or another `</div>`.
    ///
    /// Matches hand-formatted documents where every layout card is followed
    /// by a section comment or by the closing tag of its grid. A card whose
    /// own inner `</div>` sits right before such a boundary ends early.
    #[default]
    Heuristic,

    /// The `</div>` that balances the opening tag, counting nested `<div>`
    /// elements.
    Balanced,
}

/// Byte ranges of a located block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSpan {
    /// The opening tag, `<div id="..." ...>`.
    pub opening: Range<usize>,
    /// Content between the opening tag and the closing part.
    pub inner: Range<usize>,
    /// The closing `</div>`, plus the whitespace kept with it in heuristic mode.
    pub closing: Range<usize>,
}

impl BlockSpan {
    /// The whole block, opening tag through closing part.
    pub fn full(&self) -> Range<usize> {
        self.opening.start..self.closing.end
    }
}

/// Finds the block of one layout card.
#[derive(Debug, Clone)]
pub struct BlockLocator {
    opening: Regex,
    mode: BoundaryMode,
}

impl BlockLocator {
    /// Create a locator for the element whose `id` equals `id`.
    pub fn new(id: &str, mode: BoundaryMode) -> Self {
        // At least one attribute must follow the id.
        let pattern = format!(r#"<div id="{}"[^>]+>"#, regex::escape(id));
        let opening = Regex::new(&pattern).expect("escaped layout id forms a valid pattern");
        Self { opening, mode }
    }

    /// Locate the first block with a closing boundary.
    ///
    /// Opening tags without a usable closing boundary are skipped in favour
    /// of later occurrences.
    pub fn locate(&self, document: &str) -> Option<BlockSpan> {
        for found in self.opening.find_iter(document) {
            let closing = match self.mode {
                BoundaryMode::Heuristic => heuristic_close(document, found.end()),
                BoundaryMode::Balanced => balanced_close(document, found.end()),
            };

            match closing {
                Some(closing) => {
                    log::debug!(
                        "Block at {}..{} (inner {} bytes)",
                        found.start(),
                        closing.end,
                        closing.start - found.end()
                    );
                    return Some(BlockSpan {
                        opening: found.range(),
                        inner: found.end()..closing.start,
                        closing,
                    });
                }
                None => {
                    log::warn!(
                        "Opening tag at byte {} has no closing boundary ({:?} mode)",
                        found.start(),
                        self.mode
                    );
                }
            }
        }
        None
    }
}

/// Closing part for heuristic mode, searching from `from`.
fn heuristic_close(document: &str, from: usize) -> Option<Range<usize>> {
    let mut cursor = from;
    while let Some(offset) = document[cursor..].find(CLOSE_TAG) {
        let start = cursor + offset;
        let tag_end = start + CLOSE_TAG.len();
        if let Some(keep) = trailing_whitespace(&document[tag_end..]) {
            return Some(start..tag_end + keep);
        }
        cursor = tag_end;
    }
    None
}

/// Length of the whitespace kept after a closing tag, if `rest` starts a
/// boundary.
///
/// `rest` must open with a whitespace run containing a line break and
/// followed by a comment or a closing `</div>`. Everything up to the last
/// line break of the run stays with the closing tag.
fn trailing_whitespace(rest: &str) -> Option<usize> {
    let run_len = rest.len() - rest.trim_start().len();
    let (run, after) = rest.split_at(run_len);
    if !(after.starts_with(COMMENT_OPEN) || after.starts_with(CLOSE_TAG)) {
        return None;
    }
    run.rfind('\n')
}

/// Closing tag for balanced mode, searching from `from`.
fn balanced_close(document: &str, from: usize) -> Option<Range<usize>> {
    let tags = Regex::new(r"<div\b[^>]*>|</div\s*>").unwrap();
    let mut depth = 1usize;
    for tag in tags.find_iter(&document[from..]) {
        if tag.as_str().starts_with("</") {
            depth -= 1;
            if depth == 0 {
                return Some(from + tag.start()..from + tag.end());
            }
        } else {
            depth += 1;
        }
    }
    None
}
