//! PDF processing module.

mod extractor;

pub use extractor::{PdfContent, PdfExtractor};

use crate::error::PdfError;

/// Quality of the text layer found in a PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextQuality {
    /// Enough readable text to extract fields from.
    Usable,
    /// No text layer, or too little text to work with (scanned document).
    Empty,
    /// Text is present but mostly unreadable glyph soup.
    Garbled,
}

impl TextQuality {
    /// Classify extracted text.
    ///
    /// Text shorter than `min_len` characters is `Empty`; text whose share of
    /// alphanumeric, whitespace and punctuation characters falls below
    /// `readable_ratio` is `Garbled`.
    pub fn assess(text: &str, min_len: usize, readable_ratio: f32) -> Self {
        let trimmed = text.trim();
        let total = trimmed.chars().count();
        if total < min_len.max(1) {
            return TextQuality::Empty;
        }

        let readable = trimmed
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace() || c.is_ascii_punctuation())
            .count();

        if (readable as f32) / (total as f32) < readable_ratio {
            TextQuality::Garbled
        } else {
            TextQuality::Usable
        }
    }

    pub fn needs_ocr(&self) -> bool {
        !matches!(self, TextQuality::Usable)
    }
}

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Extract text from the entire PDF.
    fn extract_text(&self) -> Result<String>;
}

/// Whether the bytes start with the PDF magic header.
pub fn is_pdf(data: &[u8]) -> bool {
    data.starts_with(b"%PDF")
}
