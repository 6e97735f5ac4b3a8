//! Extraction strategies.
//!
//! A strategy is one self-contained attempt at a field. It reads the source
//! text, the fields resolved earlier in the same record and (for entity
//! lookups) the classifier, and either produces a value or gives up.

mod anchor_regex;
mod entity_lookup;
mod known_value;
mod line_window;

pub use anchor_regex::{AnchorRegexStrategy, Capture, Pick};
pub use entity_lookup::{Collect, EntityFilter, EntityLookupStrategy};
pub use known_value::{KnownValue, KnownValueStrategy, Lookup, Needle, Source};
pub use line_window::{LineRule, LineWindowStrategy};

use crate::models::{ExtractedRecord, FieldValue};
use crate::nlp::EntityAdapter;
use crate::text::{locate, prefix};

/// Read-only inputs shared by every strategy run on one document.
pub struct ExtractContext<'a> {
    /// Source text, already cut to the scan limit.
    pub text: &'a str,
    /// Fields resolved earlier in this record.
    pub resolved: &'a ExtractedRecord,
    /// Entity classifier access for this document.
    pub entities: &'a EntityAdapter<'a>,
}

/// One extraction attempt for a field.
pub trait Strategy: Send + Sync {
    /// Short name reported alongside the value it produced.
    fn name(&self) -> &'static str;

    /// Try to produce a value.
    fn apply(&self, ctx: &ExtractContext<'_>) -> Option<FieldValue>;
}

/// Precondition on the document for a gated strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// `needle` occurs (case-sensitively, any whitespace between its words)
    /// within the first `within` characters.
    PrefixContains { needle: &'static str, within: usize },
}

impl Gate {
    pub fn holds(&self, text: &str) -> bool {
        match self {
            Gate::PrefixContains { needle, within } => locate(prefix(text, *within), needle, true).is_some(),
        }
    }
}

/// A strategy that only runs when its gate holds.
pub struct Gated {
    gate: Gate,
    inner: Box<dyn Strategy>,
}

impl Gated {
    pub fn new(gate: Gate, inner: impl Strategy + 'static) -> Self {
        Self {
            gate,
            inner: Box::new(inner),
        }
    }
}

impl Strategy for Gated {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn apply(&self, ctx: &ExtractContext<'_>) -> Option<FieldValue> {
        if !self.gate.holds(ctx.text) {
            return None;
        }
        self.inner.apply(ctx)
    }
}

/// Collapse runs of whitespace to single spaces and trim.
pub(crate) fn squash_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
