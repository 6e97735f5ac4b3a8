//! Error types for the filing-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load the pipeline configuration.
#[derive(Error, Debug)]
pub enum FilingError {
    /// The configuration file is not valid JSON for [`crate::FilingConfig`].
    #[error("configuration error: {0}")]
    Config(String),

    /// The configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure to turn a document into source text. Fatal for the document.
#[derive(Error, Debug)]
pub enum ReadError {
    /// The file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The PDF could not be parsed or its text extracted.
    #[error(transparent)]
    Pdf(#[from] PdfError),

    /// Plain-text input that is not valid UTF-8.
    #[error("{name} is not a PDF and not valid UTF-8 text")]
    NotText { name: String },
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted with a non-empty password.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors raised by external collaborators.
///
/// These never fail a whole record: the fields that depend on the
/// collaborator are left absent and extraction carries on.
#[derive(Error, Debug)]
pub enum CollaboratorError {
    /// No collaborator is configured.
    #[error("{0} is not configured")]
    Unavailable(&'static str),

    /// Transport-level failure.
    #[error("request failed: {0}")]
    Transport(String),

    /// The call did not finish in time.
    #[error("request timed out")]
    Timeout,

    /// The per-document time budget is spent; no further calls are made.
    #[error("document deadline exceeded")]
    DeadlineExceeded,

    /// The service answered with a non-success status.
    #[error("service returned HTTP {status}: {detail}")]
    Status { status: u16, detail: String },

    /// The service refused the input (e.g. non-PDF upload).
    #[error("input rejected: {0}")]
    Rejected(String),

    /// The response body did not have the expected shape.
    #[error("malformed response: {0}")]
    Payload(String),
}

impl From<reqwest::Error> for CollaboratorError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            CollaboratorError::Timeout
        } else if e.is_decode() {
            CollaboratorError::Payload(e.to_string())
        } else {
            CollaboratorError::Transport(e.to_string())
        }
    }
}
