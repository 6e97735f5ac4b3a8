//! HTTP client for an entity-classification service.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{Entity, EntityClassifier, EntityLabel};
use crate::error::CollaboratorError;

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ClassifyResponse {
    #[serde(default)]
    entities: Vec<RawEntity>,
}

/// Span as reported by the service, in character offsets.
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawEntity {
    label: EntityLabel,
    start: usize,
    end: usize,
}

/// Entity classifier backed by `POST <endpoint>` with `{"text": ...}`.
pub struct HttpEntityClassifier {
    client: Client,
    endpoint: String,
}

impl HttpEntityClassifier {
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Result<Self, CollaboratorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl EntityClassifier for HttpEntityClassifier {
    fn classify(&self, text: &str) -> Result<Vec<Entity>, CollaboratorError> {
        debug!("Classifying {} chars via {}", text.chars().count(), self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&ClassifyRequest { text })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            return Err(CollaboratorError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        let body: ClassifyResponse = response.json()?;
        Ok(to_byte_offsets(text, &body.entities))
    }
}

/// Convert character-offset spans into byte-offset entities, dropping spans
/// that fall outside the text.
fn to_byte_offsets(text: &str, raw: &[RawEntity]) -> Vec<Entity> {
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();

    raw.iter()
        .filter_map(|e| {
            if e.start >= e.end {
                trace!("Dropping empty span {}..{}", e.start, e.end);
                return None;
            }
            let start = *boundaries.get(e.start)?;
            let end = *boundaries.get(e.end)?;
            Some(Entity::new(e.label, start, end))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw(label: EntityLabel, start: usize, end: usize) -> RawEntity {
        RawEntity { label, start, end }
    }

    #[test]
    fn test_char_offsets_become_byte_offsets() {
        let text = "Société Générale appointed José Núñez";
        let spans = [raw(EntityLabel::Org, 0, 16), raw(EntityLabel::Person, 27, 37)];

        let entities = to_byte_offsets(text, &spans);
        let texts: Vec<&str> = entities.iter().map(|e| e.text(text).unwrap()).collect();
        assert_eq!(texts, vec!["Société Générale", "José Núñez"]);
    }

    #[test]
    fn test_out_of_range_spans_dropped() {
        let spans = [raw(EntityLabel::Person, 0, 3), raw(EntityLabel::Person, 2, 99), raw(EntityLabel::Person, 2, 2)];
        assert_eq!(to_byte_offsets("abc", &spans), vec![Entity::new(EntityLabel::Person, 0, 3)]);
    }

    #[test]
    fn test_response_shape() {
        let body: ClassifyResponse = serde_json::from_str(
            r#"{"entities":[{"label":"PERSON","start":0,"end":8},{"label":"DATE","start":9,"end":13}]}"#,
        )
        .unwrap();
        assert_eq!(body.entities.len(), 2);
        assert_eq!(body.entities[1].label, EntityLabel::Other);
    }

    #[test]
    fn test_unreachable_service_is_transport_error() {
        let classifier = HttpEntityClassifier::new("http://127.0.0.1:9/entities", 2).unwrap();
        let err = classifier.classify("Jane Roe").unwrap_err();
        assert!(matches!(err, CollaboratorError::Transport(_) | CollaboratorError::Timeout));
    }
}
