//! Turning a document on disk into source text.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{CollaboratorError, ReadError};
use crate::models::config::OcrConfig;
use crate::ocr::{join_pages, HttpOcrClient, OcrService};
use crate::pdf::{is_pdf, PdfExtractor, PdfProcessor};

/// How the text of a document was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOrigin {
    /// The file was already plain text.
    Plain,
    /// The PDF's own text layer.
    PdfText,
    /// Recognized by the OCR service.
    Ocr,
}

/// Full decoded text of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    text: String,
    origin: TextOrigin,
}

impl SourceText {
    pub fn new(text: impl Into<String>, origin: TextOrigin) -> Self {
        Self {
            text: text.into(),
            origin,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn origin(&self) -> TextOrigin {
        self.origin
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// Reads documents, falling back to OCR for scanned or garbled PDFs.
pub struct DocumentLoader {
    ocr: Option<Box<dyn OcrService>>,
    min_text_length: usize,
    readable_ratio: f32,
}

impl DocumentLoader {
    /// Loader without an OCR fallback.
    pub fn new() -> Self {
        let defaults = OcrConfig::default();
        Self {
            ocr: None,
            min_text_length: defaults.min_text_length,
            readable_ratio: defaults.readable_ratio,
        }
    }

    /// Loader configured from the OCR section of the configuration.
    pub fn from_config(config: &OcrConfig) -> Result<Self, CollaboratorError> {
        let mut loader = Self {
            ocr: None,
            min_text_length: config.min_text_length,
            readable_ratio: config.readable_ratio,
        };
        if let Some(endpoint) = config.endpoint.as_deref() {
            loader.ocr = Some(Box::new(HttpOcrClient::new(endpoint, config.timeout_secs)?));
        }
        Ok(loader)
    }

    /// Use a specific OCR service.
    pub fn with_ocr(mut self, ocr: Box<dyn OcrService>) -> Self {
        self.ocr = Some(ocr);
        self
    }

    /// Read and decode the file at `path`.
    pub fn load_path(&self, path: &Path) -> Result<SourceText, ReadError> {
        let data = std::fs::read(path).map_err(|source| ReadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.load_bytes(&name, &data)
    }

    /// Decode document bytes. PDFs are recognized by their magic header;
    /// anything else must be UTF-8 text.
    pub fn load_bytes(&self, name: &str, data: &[u8]) -> Result<SourceText, ReadError> {
        if is_pdf(data) {
            return self.load_pdf(name, data);
        }

        let text = std::str::from_utf8(data).map_err(|_| ReadError::NotText {
            name: name.to_string(),
        })?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        debug!("Loaded {} as plain text ({} bytes)", name, text.len());
        Ok(SourceText::new(text, TextOrigin::Plain))
    }

    fn load_pdf(&self, name: &str, data: &[u8]) -> Result<SourceText, ReadError> {
        let mut extractor = PdfExtractor::new();
        extractor.load(data)?;

        let content = match extractor.extract_all(self.min_text_length, self.readable_ratio) {
            Ok(content) => content,
            Err(e) => {
                // No usable text layer at all: OCR is the only way left.
                if let Some(text) = self.ocr_text(name, data) {
                    return Ok(SourceText::new(text, TextOrigin::Ocr));
                }
                return Err(e.into());
            }
        };

        if content.quality.needs_ocr() {
            info!("{} text layer is {:?}", name, content.quality);
            if let Some(text) = self.ocr_text(name, data) {
                return Ok(SourceText::new(text, TextOrigin::Ocr));
            }
        }

        Ok(SourceText::new(content.text, TextOrigin::PdfText))
    }

    fn ocr_text(&self, name: &str, data: &[u8]) -> Option<String> {
        let ocr = self.ocr.as_ref()?;
        match ocr.extract(name, data) {
            Ok(pages) => {
                let text = join_pages(&pages);
                if text.is_empty() {
                    warn!("OCR service returned no text for {}", name);
                    None
                } else {
                    Some(text)
                }
            }
            Err(e) => {
                warn!("OCR fallback failed for {}: {}", name, e);
                None
            }
        }
    }
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PdfError;
    use crate::ocr::OcrPage;
    use pretty_assertions::assert_eq;

    struct FixedOcr(&'static str);

    impl OcrService for FixedOcr {
        fn extract(&self, _filename: &str, _data: &[u8]) -> Result<Vec<OcrPage>, CollaboratorError> {
            Ok(vec![OcrPage {
                page_number: 1,
                text: self.0.to_string(),
            }])
        }

        fn health(&self) -> Result<bool, CollaboratorError> {
            Ok(true)
        }
    }

    #[test]
    fn test_plain_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("10k.txt");
        std::fs::write(&path, "\u{feff}FORM 10-K\nACME WIDGETS INC").unwrap();

        let source = DocumentLoader::new().load_path(&path).unwrap();
        assert_eq!(source.as_str(), "FORM 10-K\nACME WIDGETS INC");
        assert_eq!(source.origin(), TextOrigin::Plain);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = DocumentLoader::new()
            .load_path(Path::new("/nonexistent/filing.txt"))
            .unwrap_err();
        assert!(matches!(err, ReadError::Io { .. }));
    }

    #[test]
    fn test_binary_file_is_not_text() {
        let err = DocumentLoader::new()
            .load_bytes("blob.bin", &[0xff, 0xfe, 0x00, 0x9f])
            .unwrap_err();
        assert!(matches!(err, ReadError::NotText { .. }));
    }

    #[test]
    fn test_corrupt_pdf_is_read_error() {
        let loader = DocumentLoader::new().with_ocr(Box::new(FixedOcr("recovered")));
        let err = loader.load_bytes("broken.pdf", b"%PDF-1.4 truncated").unwrap_err();
        assert!(matches!(err, ReadError::Pdf(PdfError::Parse(_))));
    }
}
