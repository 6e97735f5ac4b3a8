//! Named-entity classification.
//!
//! The classifier itself lives outside this crate. [`EntityClassifier`] is the
//! seam: an HTTP client talks to a real model, [`PhraseClassifier`] answers
//! from a fixed phrase table for tests, and [`UnavailableClassifier`] is used
//! when nothing is configured.

mod adapter;
mod http;

pub use adapter::EntityAdapter;
pub use http::HttpEntityClassifier;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::CollaboratorError;
use crate::models::config::NlpConfig;

/// Entity type reported by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    Person,
    Org,
    #[serde(other)]
    Other,
}

/// A labelled span, as byte offsets into the classified text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entity {
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
}

impl Entity {
    pub fn new(label: EntityLabel, start: usize, end: usize) -> Self {
        Self { label, start, end }
    }

    /// The span's text, if the offsets are valid for `text`.
    pub fn text<'t>(&self, text: &'t str) -> Option<&'t str> {
        text.get(self.start..self.end)
    }
}

/// Labels spans of text as PERSON / ORG.
pub trait EntityClassifier: Send + Sync {
    /// Classify a window of text. Spans are returned in document order.
    fn classify(&self, text: &str) -> Result<Vec<Entity>, CollaboratorError>;
}

/// Classifier used when no entity service is configured. Every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableClassifier;

impl EntityClassifier for UnavailableClassifier {
    fn classify(&self, _text: &str) -> Result<Vec<Entity>, CollaboratorError> {
        Err(CollaboratorError::Unavailable("entity classifier"))
    }
}

/// Deterministic classifier that labels every occurrence of known phrases.
///
/// Overlapping hits are resolved in favour of the earliest, then longest, span.
#[derive(Debug, Clone, Default)]
pub struct PhraseClassifier {
    phrases: Vec<(EntityLabel, String)>,
}

impl PhraseClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, label: EntityLabel, phrase: impl Into<String>) -> Self {
        self.phrases.push((label, phrase.into()));
        self
    }

    pub fn with_people<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().fold(self, |c, n| c.with(EntityLabel::Person, n))
    }

    pub fn with_orgs<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().fold(self, |c, n| c.with(EntityLabel::Org, n))
    }
}

impl EntityClassifier for PhraseClassifier {
    fn classify(&self, text: &str) -> Result<Vec<Entity>, CollaboratorError> {
        let mut hits: Vec<Entity> = self
            .phrases
            .iter()
            .filter(|(_, phrase)| !phrase.is_empty())
            .flat_map(|(label, phrase)| {
                text.match_indices(phrase.as_str())
                    .map(move |(start, m)| Entity::new(*label, start, start + m.len()))
            })
            .collect();

        hits.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

        let mut entities: Vec<Entity> = Vec::with_capacity(hits.len());
        for hit in hits {
            if entities.last().is_some_and(|prev| hit.start < prev.end) {
                continue;
            }
            entities.push(hit);
        }
        Ok(entities)
    }
}

/// Build the classifier described by the configuration.
pub fn classifier_from_config(config: &NlpConfig) -> Arc<dyn EntityClassifier> {
    match config.endpoint.as_deref() {
        Some(endpoint) => match HttpEntityClassifier::new(endpoint, config.timeout_secs) {
            Ok(client) => Arc::new(client),
            Err(e) => {
                warn!("Entity classifier disabled: {}", e);
                Arc::new(UnavailableClassifier)
            }
        },
        None => Arc::new(UnavailableClassifier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_phrase_classifier_document_order() {
        let classifier = PhraseClassifier::new()
            .with_people(["Jane Roe", "John Doe"])
            .with_orgs(["Acme LLP"]);
        let text = "John Doe met Jane Roe at Acme LLP. John Doe left.";

        let found: Vec<(EntityLabel, &str)> = classifier
            .classify(text)
            .unwrap()
            .iter()
            .map(|e| (e.label, e.text(text).unwrap()))
            .collect();

        assert_eq!(
            found,
            vec![
                (EntityLabel::Person, "John Doe"),
                (EntityLabel::Person, "Jane Roe"),
                (EntityLabel::Org, "Acme LLP"),
                (EntityLabel::Person, "John Doe"),
            ]
        );
    }

    #[test]
    fn test_overlap_prefers_longest() {
        let classifier = PhraseClassifier::new()
            .with(EntityLabel::Org, "Ernst")
            .with(EntityLabel::Org, "Ernst & Young LLP");
        let entities = classifier.classify("by Ernst & Young LLP").unwrap();
        assert_eq!(entities, vec![Entity::new(EntityLabel::Org, 3, 20)]);
    }

    #[test]
    fn test_unavailable_classifier_errors() {
        assert!(matches!(
            UnavailableClassifier.classify("text"),
            Err(CollaboratorError::Unavailable(_))
        ));
    }

    #[test]
    fn test_unknown_label_deserializes_as_other() {
        let label: EntityLabel = serde_json::from_str("\"GPE\"").unwrap();
        assert_eq!(label, EntityLabel::Other);
        let label: EntityLabel = serde_json::from_str("\"PERSON\"").unwrap();
        assert_eq!(label, EntityLabel::Person);
    }
}
