//! OCR fallback for scanned filings.
//!
//! Recognition runs in a separate service; this module only speaks its
//! upload protocol and stitches the returned pages back together.

mod client;

pub use client::HttpOcrClient;

use serde::{Deserialize, Serialize};

use crate::error::CollaboratorError;

/// Text recognized on one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrPage {
    /// Page number (1-indexed).
    pub page_number: u32,

    /// Recognized text.
    pub text: String,
}

/// Response body of the OCR service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrResponse {
    /// Name of the uploaded file, echoed back.
    #[serde(default)]
    pub filename: Option<String>,

    /// Pages in the order the service produced them.
    #[serde(default)]
    pub pages: Vec<OcrPage>,
}

/// A service that turns document bytes into per-page text.
pub trait OcrService: Send + Sync {
    /// Recognize the text of a PDF document.
    fn extract(&self, filename: &str, data: &[u8]) -> Result<Vec<OcrPage>, CollaboratorError>;

    /// Whether the service reports itself healthy.
    fn health(&self) -> Result<bool, CollaboratorError>;
}

/// Join page texts in page order, separated by blank lines.
pub fn join_pages(pages: &[OcrPage]) -> String {
    let mut ordered: Vec<&OcrPage> = pages.iter().collect();
    ordered.sort_by_key(|p| p.page_number);
    ordered
        .iter()
        .map(|p| p.text.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
