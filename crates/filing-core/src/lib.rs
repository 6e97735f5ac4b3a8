//! Core library for regulatory filing metadata extraction.
//!
//! This crate provides:
//! - Document loading (plain text, PDF text layer, OCR fallback)
//! - Anchor location and bounded windows over the source text
//! - Cascading field extraction with per-field ordered strategies
//! - Filer-profile and filer-identity output records

pub mod document;
pub mod error;
pub mod filing;
pub mod models;
pub mod nlp;
pub mod ocr;
pub mod pdf;
pub mod text;

pub use document::{DocumentLoader, SourceText, TextOrigin};
pub use error::{CollaboratorError, FilingError, PdfError, ReadError};
pub use filing::{FilingParser, IdentityParser, ParseReport, ProfileParser};
pub use models::{
    ExtractedRecord, ExtractionResult, Field, FieldValue, FilingConfig, IdentityRecord, ProfileRecord,
};
pub use nlp::{
    classifier_from_config, EntityClassifier, EntityLabel, HttpEntityClassifier, PhraseClassifier,
    UnavailableClassifier,
};
pub use ocr::{HttpOcrClient, OcrService};
