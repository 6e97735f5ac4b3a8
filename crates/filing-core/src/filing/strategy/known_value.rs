//! Lookups against fixed value tables and earlier fields.

use regex::Regex;

use super::{ExtractContext, Strategy};
use crate::models::{Field, FieldValue};
use crate::text::prefix;

/// What a known-value lookup reads.
#[derive(Debug, Clone, Copy)]
pub enum Source {
    /// The document text, optionally only its first `max_chars` characters.
    Text { max_chars: Option<usize> },
    /// An already-resolved text field.
    Field(Field),
}

/// How a table entry recognizes its value.
#[derive(Debug, Clone, Copy)]
pub enum Needle {
    /// Case-insensitive substring.
    Insensitive(&'static str),
    /// Case-sensitive substring.
    Sensitive(&'static str),
    /// Regex match.
    Pattern(&'static Regex),
}

impl Needle {
    pub fn is_in(&self, haystack: &str) -> bool {
        self.found(haystack, &haystack.to_lowercase())
    }

    /// `lowered` is `haystack` in lower case, computed once per table scan.
    fn found(&self, haystack: &str, lowered: &str) -> bool {
        match self {
            Needle::Insensitive(needle) => lowered.contains(&needle.to_lowercase()),
            Needle::Sensitive(needle) => haystack.contains(needle),
            Needle::Pattern(pattern) => pattern.is_match(haystack),
        }
    }
}

/// A table entry: when the needle is found, the value is reported.
#[derive(Debug, Clone, Copy)]
pub struct KnownValue {
    pub needle: Needle,
    pub value: &'static str,
}

impl KnownValue {
    pub const fn new(needle: Needle, value: &'static str) -> Self {
        Self { needle, value }
    }
}

/// How the source becomes a value.
#[derive(Debug, Clone)]
pub enum Lookup {
    /// The source text itself (only meaningful for field sources).
    Verbatim,
    /// The first table entry, in table order, whose needle is found.
    Table(Vec<KnownValue>),
    /// A formatting function over the source.
    Format(fn(&str) -> Option<String>),
}

/// Report a fixed value based on what the source contains.
pub struct KnownValueStrategy {
    name: &'static str,
    source: Source,
    lookup: Lookup,
}

impl KnownValueStrategy {
    pub fn new(name: &'static str, source: Source, lookup: Lookup) -> Self {
        Self { name, source, lookup }
    }

    /// Table lookup over the whole document.
    pub fn table(name: &'static str, entries: Vec<KnownValue>) -> Self {
        Self::new(name, Source::Text { max_chars: None }, Lookup::Table(entries))
    }
}

impl Strategy for KnownValueStrategy {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, ctx: &ExtractContext<'_>) -> Option<FieldValue> {
        let source = match self.source {
            Source::Text { max_chars: Some(n) } => prefix(ctx.text, n),
            Source::Text { max_chars: None } => ctx.text,
            Source::Field(field) => ctx.resolved.text(field)?,
        };

        let value = match &self.lookup {
            Lookup::Verbatim => Some(source.trim().to_string()),
            Lookup::Table(entries) => {
                let lowered = source.to_lowercase();
                entries
                    .iter()
                    .find(|entry| entry.needle.found(source, &lowered))
                    .map(|entry| entry.value.to_string())
            }
            Lookup::Format(format) => format(source),
        };

        value.filter(|v| !v.is_empty()).map(FieldValue::Text)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{run, run_with, text};
    use super::*;
    use crate::models::{ExtractedRecord, ExtractionResult};
    use crate::nlp::UnavailableClassifier;
    use lazy_static::lazy_static;
    use pretty_assertions::assert_eq;

    lazy_static! {
        static ref ZIP: Regex = Regex::new(r"\b[A-Z]{2}\s+\d{5}").unwrap();
    }

    fn firms() -> Vec<KnownValue> {
        vec![
            KnownValue::new(Needle::Insensitive("Deloitte"), "Deloitte"),
            KnownValue::new(Needle::Insensitive("KPMG"), "KPMG"),
        ]
    }

    #[test]
    fn test_table_order_wins_over_position() {
        let strategy = KnownValueStrategy::table("known", firms());
        assert_eq!(text(run(&strategy, "kpmg then DELOITTE & touche")), Some("Deloitte".to_string()));
        assert_eq!(run(&strategy, "no firm"), None);
    }

    #[test]
    fn test_field_source() {
        let mut record = ExtractedRecord::new();
        record.set(&ExtractionResult::resolved(
            Field::Address,
            FieldValue::Text("1 Main St, Springfield, IL 62701".to_string()),
            "street",
        ));
        let strategy = KnownValueStrategy::new(
            "country",
            Source::Field(Field::Address),
            Lookup::Table(vec![KnownValue::new(Needle::Pattern(&ZIP), "United States")]),
        );

        let value = run_with(&strategy, "", &record, &UnavailableClassifier);
        assert_eq!(text(value), Some("United States".to_string()));
        assert_eq!(run(&strategy, ""), None);
    }

    #[test]
    fn test_format_lookup() {
        fn shout(s: &str) -> Option<String> {
            Some(s.to_uppercase())
        }
        let strategy = KnownValueStrategy::new("shout", Source::Text { max_chars: Some(3) }, Lookup::Format(shout));
        assert_eq!(text(run(&strategy, "abcdef")), Some("ABC".to_string()));
    }
}
