//! Running every target over a document.
//!
//! A run is a fold: the document is threaded through [`wrap_block`] once per
//! target, in order, and each step sees the output of the previous one.

use crate::error::{Error, Result};
use crate::options::WrapOptions;
use crate::report::WrapReport;
use crate::wrap::{wrap_block, WrapOutcome};
use std::fs;
use std::io;
use std::path::Path;

/// Progress notification emitted during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent<'a> {
    /// A layout is about to be processed.
    Started {
        /// Zero-based position in the target list
        index: usize,
        /// Number of targets in the run
        total: usize,
        /// Layout id
        id: &'a str,
    },

    /// A layout has been processed.
    Finished {
        /// Layout id
        id: &'a str,
        /// What happened to it
        outcome: WrapOutcome,
    },
}

/// Applies the configured targets to documents.
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    options: WrapOptions,
}

impl Transformer {
    /// Create a transformer.
    pub fn new(options: WrapOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    pub fn options(&self) -> &WrapOptions {
        &self.options
    }

    /// Wrap every target in `document`.
    pub fn transform(&self, document: &str) -> (String, WrapReport) {
        self.transform_with_progress(document, |_| {})
    }

    /// Wrap every target in `document`, reporting progress to `on_progress`.
    pub fn transform_with_progress<F>(
        &self,
        document: &str,
        mut on_progress: F,
    ) -> (String, WrapReport)
    where
        F: FnMut(ProgressEvent<'_>),
    {
        let targets = &self.options.targets;
        let mut report = WrapReport::new(self.options.boundary);
        report.bytes_before = document.len();

        let mut current = document.to_string();
        for (index, target) in targets.iter().enumerate() {
            on_progress(ProgressEvent::Started {
                index,
                total: targets.len(),
                id: target.id(),
            });

            let (next, outcome) = wrap_block(&current, target, self.options.boundary);
            log::info!("{}: {}", target.id(), outcome);

            current = next;
            report.record(target.id(), target.classes(), outcome);
            on_progress(ProgressEvent::Finished {
                id: target.id(),
                outcome,
            });
        }

        report.bytes_after = current.len();
        (current, report)
    }
}

/// Read the document at `path`.
///
/// A missing file is reported as [`Error::InputNotFound`].
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => {
            log::info!("Read {} ({} bytes)", path.display(), text.len());
            Ok(text)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(Error::InputNotFound(path.to_path_buf()))
        }
        Err(e) => Err(Error::Io(e)),
    }
}

/// Write the document to `path`, replacing any existing content.
pub fn write_document<P: AsRef<Path>>(path: P, document: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, document)?;
    log::info!("Wrote {} ({} bytes)", path.display(), document.len());
    Ok(())
}

/// Wrap the document at `path` in place.
pub fn run_file<P: AsRef<Path>>(path: P, options: WrapOptions) -> Result<WrapReport> {
    let path = path.as_ref();
    run_file_to(path, path, options)
}

/// Wrap the document at `input` and write the result to `output`.
pub fn run_file_to<P, Q>(input: P, output: Q, options: WrapOptions) -> Result<WrapReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    run_file_with_progress(input, output, options, |_| {})
}

/// Wrap the document at `input`, write it to `output`, and report progress.
///
/// The output is written even when no layout changed.
pub fn run_file_with_progress<P, Q, F>(
    input: P,
    output: Q,
    options: WrapOptions,
    on_progress: F,
) -> Result<WrapReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    F: FnMut(ProgressEvent<'_>),
{
    let document = read_document(input)?;
    let (wrapped, report) =
        Transformer::new(options).transform_with_progress(&document, on_progress);
    write_document(output, &wrapped)?;
    Ok(report)
}
