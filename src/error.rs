//! Error types for layout-wrap library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for layout-wrap operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while wrapping a document.
///
/// A layout that is missing from the document, or one that is already
/// wrapped, is reported through [`crate::WrapOutcome`] rather than here.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input document does not exist.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The layout identifier cannot be used as an `id` attribute value.
    #[error("Invalid layout id: {0:?}")]
    InvalidLayoutId(String),

    /// The class list for a layout is empty.
    #[error("Invalid class list for layout {0:?}")]
    InvalidClasses(String),

    /// Error serializing the run report.
    #[error("Report error: {0}")]
    Report(String),
}
