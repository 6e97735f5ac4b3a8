//! Fallback cascade controller.
//!
//! Each field runs its strategies strictly in declared order. The first
//! value that survives validation resolves the field; when every strategy
//! has been tried the field is exhausted. Nothing is retried, merged or
//! reordered, so the same text and collaborator answers always give the
//! same record.

use tracing::{debug, trace};

use super::strategy::{ExtractContext, Strategy};
use crate::models::{ExtractedRecord, ExtractionResult, Field, FieldValue};
use crate::nlp::EntityAdapter;

/// Acceptance test applied to every candidate value of a field.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    min_chars: usize,
    min_items: usize,
    reject_containing: &'static [&'static str],
    reject_equal: &'static [&'static str],
    sentinel: Option<&'static str>,
    check: Option<fn(&str) -> bool>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text values need at least this many characters after trimming.
    pub fn min_chars(mut self, n: usize) -> Self {
        self.min_chars = n;
        self
    }

    /// List values need at least this many items.
    pub fn min_items(mut self, n: usize) -> Self {
        self.min_items = n;
        self
    }

    pub fn reject_containing(mut self, tokens: &'static [&'static str]) -> Self {
        self.reject_containing = tokens;
        self
    }

    /// Reject values equal (ignoring ASCII case) to a placeholder.
    pub fn reject_equal(mut self, values: &'static [&'static str]) -> Self {
        self.reject_equal = values;
        self
    }

    /// A single-item list holding `sentinel` is accepted regardless of size.
    pub fn sentinel(mut self, sentinel: &'static str) -> Self {
        self.sentinel = Some(sentinel);
        self
    }

    pub fn check(mut self, check: fn(&str) -> bool) -> Self {
        self.check = Some(check);
        self
    }

    fn accepts_text(&self, value: &str) -> bool {
        let value = value.trim();
        !value.is_empty()
            && value.chars().count() >= self.min_chars
            && !self.reject_containing.iter().any(|t| value.contains(t))
            && !self.reject_equal.iter().any(|p| value.eq_ignore_ascii_case(p))
            && self.check.is_none_or(|check| check(value))
    }

    pub fn accepts(&self, value: &FieldValue) -> bool {
        match value {
            FieldValue::Text(text) => self.accepts_text(text),
            FieldValue::List(items) => {
                if let (Some(sentinel), [only]) = (self.sentinel, items.as_slice()) {
                    if only == sentinel {
                        return true;
                    }
                }
                !items.is_empty()
                    && items.len() >= self.min_items
                    && items.iter().all(|item| self.accepts_text(item))
            }
        }
    }
}

/// One output field with its ordered strategies.
pub struct FieldSpec {
    field: Field,
    strategies: Vec<Box<dyn Strategy>>,
    validator: Validator,
    requires: Option<Field>,
}

impl FieldSpec {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            strategies: Vec::new(),
            validator: Validator::default(),
            requires: None,
        }
    }

    /// Append a strategy to the cascade.
    pub fn then(mut self, strategy: impl Strategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    pub fn validate(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    /// Only attempt this field once `field` has been resolved.
    pub fn requires(mut self, field: Field) -> Self {
        self.requires = Some(field);
        self
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Bring a raw strategy value into the field's shape.
    fn normalize(&self, value: FieldValue) -> FieldValue {
        match value {
            FieldValue::Text(text) if self.field.is_list() => FieldValue::List(vec![text.trim().to_string()]),
            FieldValue::Text(text) => FieldValue::Text(text.trim().to_string()),
            FieldValue::List(items) if !self.field.is_list() => FieldValue::Text(items.join(", ")),
            list => list,
        }
    }

    /// Run the cascade for this field.
    pub fn resolve(&self, ctx: &ExtractContext<'_>) -> ExtractionResult {
        if let Some(required) = self.requires {
            if !ctx.resolved.is_resolved(required) {
                debug!("{}: exhausted, {} is unresolved", self.field, required);
                return ExtractionResult::absent(self.field);
            }
        }

        for strategy in &self.strategies {
            let Some(raw) = strategy.apply(ctx) else {
                trace!("{}: {} produced nothing", self.field, strategy.name());
                continue;
            };
            let value = self.normalize(raw);
            if self.validator.accepts(&value) {
                debug!("{}: resolved by {}", self.field, strategy.name());
                return ExtractionResult::resolved(self.field, value, strategy.name());
            }
            trace!("{}: {} rejected {:?}", self.field, strategy.name(), value);
        }

        debug!("{}: exhausted after {} strategies", self.field, self.strategies.len());
        ExtractionResult::absent(self.field)
    }
}

/// Ordered field cascades for one output variant.
pub struct CascadeEngine {
    specs: Vec<FieldSpec>,
}

impl CascadeEngine {
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        Self { specs }
    }

    pub fn specs(&self) -> &[FieldSpec] {
        &self.specs
    }

    /// Resolve every field in declaration order. Later fields see the
    /// values of earlier ones.
    pub fn run(&self, text: &str, entities: &EntityAdapter<'_>) -> (ExtractedRecord, Vec<ExtractionResult>) {
        let mut record = ExtractedRecord::new();
        let mut results = Vec::with_capacity(self.specs.len());

        for spec in &self.specs {
            let result = {
                let ctx = ExtractContext {
                    text,
                    resolved: &record,
                    entities,
                };
                spec.resolve(&ctx)
            };
            record.set(&result);
            results.push(result);
        }

        (record, results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filing::strategy::{KnownValue, KnownValueStrategy, Lookup, Needle, Source};
    use crate::nlp::UnavailableClassifier;
    use pretty_assertions::assert_eq;

    fn table(name: &'static str, needle: &'static str, value: &'static str) -> KnownValueStrategy {
        KnownValueStrategy::table(name, vec![KnownValue::new(Needle::Sensitive(needle), value)])
    }

    fn run(engine: &CascadeEngine, text: &str) -> (ExtractedRecord, Vec<ExtractionResult>) {
        let classifier = UnavailableClassifier;
        let entities = EntityAdapter::new(&classifier, 1000);
        engine.run(text, &entities)
    }

    #[test]
    fn test_first_valid_strategy_wins() {
        let engine = CascadeEngine::new(vec![FieldSpec::new(Field::FormerName)
            .then(table("placeholder", "former", "N/A"))
            .then(table("real", "former", "Acme Old Name"))
            .then(table("later", "former", "Never Reached"))
            .validate(Validator::new().reject_equal(&["N/A"]))]);

        let (record, results) = run(&engine, "former name");
        assert_eq!(record.text(Field::FormerName), Some("Acme Old Name"));
        assert_eq!(results[0].strategy, Some("real"));
    }

    #[test]
    fn test_exhausted_field_is_absent() {
        let engine = CascadeEngine::new(vec![FieldSpec::new(Field::Auditor).then(table("known", "KPMG", "KPMG"))]);
        let (record, results) = run(&engine, "no firm");
        assert!(!record.is_resolved(Field::Auditor));
        assert_eq!(results, vec![ExtractionResult::absent(Field::Auditor)]);
    }

    #[test]
    fn test_prerequisite_and_earlier_fields() {
        let engine = CascadeEngine::new(vec![
            FieldSpec::new(Field::AuditorFinancialReport)
                .requires(Field::Auditor)
                .then(table("excerpt", "Report", "Report excerpt")),
            FieldSpec::new(Field::Auditor).then(table("known", "KPMG", "KPMG")),
            FieldSpec::new(Field::Name).then(KnownValueStrategy::new(
                "copy",
                Source::Field(Field::Auditor),
                Lookup::Verbatim,
            )),
        ]);

        let (record, _) = run(&engine, "Report by KPMG");
        assert!(!record.is_resolved(Field::AuditorFinancialReport));
        assert_eq!(record.text(Field::Name), Some("KPMG"));
    }

    #[test]
    fn test_text_becomes_list_for_list_fields() {
        let sentinel = "Referenced in Proxy Statement";
        let engine = CascadeEngine::new(vec![FieldSpec::new(Field::Directors)
            .then(table("sentinel", "proxy", sentinel))
            .validate(Validator::new().min_items(4).sentinel(sentinel))]);

        let (record, _) = run(&engine, "see proxy");
        assert_eq!(record.list(Field::Directors), &[sentinel.to_string()]);
    }

    #[test]
    fn test_min_items_rejects_short_lists() {
        let validator = Validator::new().min_items(4).sentinel("S");
        let short = FieldValue::List(vec!["Ann Able".into(), "Ben Baker".into(), "Cal Cole".into()]);
        let long = FieldValue::List(vec!["A1".into(), "B2".into(), "C3".into(), "D4".into()]);
        assert!(!validator.accepts(&short));
        assert!(validator.accepts(&long));
        assert!(validator.accepts(&FieldValue::List(vec!["S".into()])));
    }

    #[test]
    fn test_custom_check() {
        let validator = Validator::new().check(|v| v.chars().any(|c| c.is_ascii_digit()));
        assert!(validator.accepts(&FieldValue::Text("001-12345".into())));
        assert!(!validator.accepts(&FieldValue::Text("none".into())));
        assert!(!validator.accepts(&FieldValue::Text("   ".into())));
    }
}
