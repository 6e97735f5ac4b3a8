//! Data models: configuration and extraction records.

pub mod config;
pub mod record;

pub use config::{ExtractionConfig, FilingConfig, NlpConfig, OcrConfig};
pub use record::{ExtractedRecord, ExtractionResult, Field, FieldValue, IdentityRecord, ProfileRecord};
