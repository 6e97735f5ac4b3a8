//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::FilingError;

/// Main configuration for the filing pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilingConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Entity classifier (NLP collaborator) configuration.
    pub nlp: NlpConfig,

    /// OCR collaborator configuration.
    pub ocr: OcrConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Upper bound on how much of a document any whole-text strategy scans.
    pub max_scan_chars: usize,

    /// Wall-clock budget for one document, collaborator calls included.
    pub document_timeout_secs: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_scan_chars: 2_000_000,
            document_timeout_secs: 300,
        }
    }
}

impl ExtractionConfig {
    /// Per-document budget as a duration.
    pub fn document_timeout(&self) -> Duration {
        Duration::from_secs(self.document_timeout_secs)
    }
}

/// Entity classifier configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NlpConfig {
    /// Classification endpoint. `None` disables every entity lookup.
    pub endpoint: Option<String>,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Longest window handed to the classifier in one call.
    pub max_window_chars: usize,
}

impl Default for NlpConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: 30,
            max_window_chars: 1_000_000,
        }
    }
}

/// OCR collaborator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Base URL of the OCR service. `None` disables the OCR fallback.
    pub endpoint: Option<String>,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Extracted PDF text shorter than this is treated as missing.
    pub min_text_length: usize,

    /// Minimum share (0.0 - 1.0) of ordinary characters for text to count as readable.
    pub readable_ratio: f32,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: 120,
            min_text_length: 50,
            readable_ratio: 0.85,
        }
    }
}

impl FilingConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, FilingError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| FilingError::Config(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"nlp": {"endpoint": "http://localhost:8081/entities"}}"#).unwrap();

        let config = FilingConfig::from_file(&path).unwrap();
        assert_eq!(config.nlp.endpoint.as_deref(), Some("http://localhost:8081/entities"));
        assert_eq!(config.nlp.timeout_secs, 30);
        assert_eq!(config.ocr, OcrConfig::default());
        assert_eq!(config.extraction.max_scan_chars, 2_000_000);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = FilingConfig::from_file(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(FilingError::Io(_))));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(FilingConfig::from_file(&path), Err(FilingError::Config(_))));
    }
}
