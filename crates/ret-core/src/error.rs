//! Error types for the ret-core library.

use thiserror::Error;

/// Errors that stop a run before any document is processed.
///
/// Per-document failures are [`PdfError`] values carried by the build outcome.
#[derive(Error, Debug)]
pub enum RetError {
    /// Directory scan error.
    #[error("scan error: {0}")]
    Scan(String),

    /// Configuration error. A run never starts when this is returned.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to reading text out of a document.
#[derive(Error, Debug)]
pub enum PdfError {
    /// The file could not be read from disk.
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to field extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Failed to parse a value.
    #[error("failed to parse {field}: {value}")]
    Parse { field: String, value: String },
}

/// Result type for the ret library.
pub type Result<T> = std::result::Result<T, RetError>;
