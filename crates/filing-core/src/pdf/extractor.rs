//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::{PdfProcessor, Result, TextQuality};
use crate::error::PdfError;

/// PDF text extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

/// Text layer of a PDF and its assessed quality.
#[derive(Debug, Clone)]
pub struct PdfContent {
    /// Quality of the text layer.
    pub quality: TextQuality,
    /// Extracted text, pages separated by form feeds.
    pub text: String,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Extract the text layer and classify its quality.
    pub fn extract_all(&self, min_text_length: usize, readable_ratio: f32) -> Result<PdfContent> {
        let doc = self.document.as_ref().ok_or(PdfError::Parse("No document loaded".to_string()))?;

        let page_count = doc.get_pages().len();
        let text = self.extract_text()?;
        let quality = TextQuality::assess(&text, min_text_length, readable_ratio);

        debug!(
            "PDF analysis: {} pages, {} chars text -> {:?}",
            page_count,
            text.len(),
            quality
        );

        Ok(PdfContent { quality, text })
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf_extract works on bytes, so keep the decrypted copy
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn extract_text(&self) -> Result<String> {
        if self.raw_data.is_empty() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }
        pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }
}
