//! Per-document bridge between strategies and the entity classifier.

use std::time::Instant;

use tracing::{debug, warn};

use super::{EntityClassifier, EntityLabel};
use crate::error::CollaboratorError;
use crate::text::prefix;

/// Windows text for the classifier, filters spans by label and absorbs
/// collaborator failures.
///
/// One adapter is built per document; once its deadline has passed no
/// further classifier calls are made.
pub struct EntityAdapter<'c> {
    classifier: &'c dyn EntityClassifier,
    max_chars: usize,
    deadline: Option<Instant>,
}

impl<'c> EntityAdapter<'c> {
    pub fn new(classifier: &'c dyn EntityClassifier, max_chars: usize) -> Self {
        Self {
            classifier,
            max_chars,
            deadline: None,
        }
    }

    /// Refuse classifier calls after `deadline`.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Texts of all `label` entities in `window`, in document order.
    ///
    /// Any collaborator failure yields an empty list.
    pub fn entities<'t>(&self, window: &'t str, label: EntityLabel) -> Vec<&'t str> {
        match self.try_entities(window, label) {
            Ok(found) => found,
            Err(e) => {
                warn!("Entity lookup skipped: {}", e);
                Vec::new()
            }
        }
    }

    fn try_entities<'t>(&self, window: &'t str, label: EntityLabel) -> Result<Vec<&'t str>, CollaboratorError> {
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Err(CollaboratorError::DeadlineExceeded);
        }

        let window = prefix(window, self.max_chars);
        let entities = self.classifier.classify(window)?;
        debug!("Classifier returned {} entities for {} bytes", entities.len(), window.len());

        Ok(entities
            .iter()
            .filter(|e| e.label == label)
            .filter_map(|e| e.text(window))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect())
    }
}
