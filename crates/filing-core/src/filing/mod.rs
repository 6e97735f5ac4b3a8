//! Filing field extraction.
//!
//! A parser owns one cascade engine (the field registry of its output
//! variant) and an entity classifier. Parsing never fails: fields that no
//! strategy can fill are reported absent.

mod assembler;
mod cascade;
mod identity;
mod profile;
pub mod rules;
pub mod strategy;

pub use assembler::{assemble_identity, assemble_profile, company_type};
pub use cascade::{CascadeEngine, FieldSpec, Validator};
pub use identity::{identity_engine, identity_specs};
pub use profile::{profile_engine, profile_specs};

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::info;

use crate::models::{ExtractedRecord, ExtractionResult, Field, FilingConfig, IdentityRecord, ProfileRecord};
use crate::nlp::{classifier_from_config, EntityAdapter, EntityClassifier};
use crate::text::prefix;

/// Outcome of parsing one document.
#[derive(Debug, Clone)]
pub struct ParseReport<T> {
    /// Assembled output record.
    pub record: T,
    /// Per-field cascade outcomes in resolution order.
    pub results: Vec<ExtractionResult>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

impl<T> ParseReport<T> {
    /// Fields no strategy could fill.
    pub fn missing_fields(&self) -> Vec<Field> {
        self.results
            .iter()
            .filter(|r| !r.is_resolved())
            .map(|r| r.field)
            .collect()
    }
}

/// Trait for filing parsers.
pub trait FilingParser {
    /// The typed record this parser produces.
    type Output;

    /// Parse a filing from its source text.
    fn parse(&self, text: &str) -> ParseReport<Self::Output>;
}

/// Limits shared by both parsers.
#[derive(Debug, Clone, Copy)]
struct Limits {
    max_scan_chars: usize,
    max_window_chars: usize,
    document_timeout: Duration,
}

impl Limits {
    fn from_config(config: &FilingConfig) -> Self {
        Self {
            max_scan_chars: config.extraction.max_scan_chars,
            max_window_chars: config.nlp.max_window_chars,
            document_timeout: config.extraction.document_timeout(),
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::from_config(&FilingConfig::default())
    }
}

/// Run an engine over one document under the given limits.
fn run_engine(
    engine: &CascadeEngine,
    classifier: &dyn EntityClassifier,
    limits: Limits,
    text: &str,
) -> (ExtractedRecord, Vec<ExtractionResult>, u64) {
    let start = Instant::now();
    let scanned = prefix(text, limits.max_scan_chars);
    info!("Extracting fields from {} characters of text", scanned.len());

    let mut entities = EntityAdapter::new(classifier, limits.max_window_chars);
    if let Some(deadline) = start.checked_add(limits.document_timeout) {
        entities = entities.with_deadline(deadline);
    }
    let (record, results) = engine.run(scanned, &entities);

    let elapsed = start.elapsed().as_millis() as u64;
    info!("Resolved {} of {} fields in {}ms", record.len(), results.len(), elapsed);
    (record, results, elapsed)
}

/// Parser for the filer-profile output.
pub struct ProfileParser {
    engine: CascadeEngine,
    classifier: Arc<dyn EntityClassifier>,
    limits: Limits,
}

impl ProfileParser {
    pub fn new(classifier: Arc<dyn EntityClassifier>) -> Self {
        Self {
            engine: profile_engine(),
            classifier,
            limits: Limits::default(),
        }
    }

    /// Build a parser with the classifier and limits the configuration describes.
    pub fn with_config(config: &FilingConfig) -> Self {
        Self {
            engine: profile_engine(),
            classifier: classifier_from_config(&config.nlp),
            limits: Limits::from_config(config),
        }
    }
}

impl FilingParser for ProfileParser {
    type Output = ProfileRecord;

    fn parse(&self, text: &str) -> ParseReport<ProfileRecord> {
        let (record, results, processing_time_ms) = run_engine(&self.engine, self.classifier.as_ref(), self.limits, text);
        ParseReport {
            record: assemble_profile(&record),
            results,
            processing_time_ms,
        }
    }
}

/// Parser for the filer-identity output.
pub struct IdentityParser {
    engine: CascadeEngine,
    classifier: Arc<dyn EntityClassifier>,
    limits: Limits,
}

impl IdentityParser {
    pub fn new(classifier: Arc<dyn EntityClassifier>) -> Self {
        Self {
            engine: identity_engine(),
            classifier,
            limits: Limits::default(),
        }
    }

    pub fn with_config(config: &FilingConfig) -> Self {
        Self {
            engine: identity_engine(),
            classifier: classifier_from_config(&config.nlp),
            limits: Limits::from_config(config),
        }
    }
}

impl FilingParser for IdentityParser {
    type Output = IdentityRecord;

    fn parse(&self, text: &str) -> ParseReport<IdentityRecord> {
        let (record, results, processing_time_ms) = run_engine(&self.engine, self.classifier.as_ref(), self.limits, text);
        ParseReport {
            record: assemble_identity(&record),
            results,
            processing_time_ms,
        }
    }
}
