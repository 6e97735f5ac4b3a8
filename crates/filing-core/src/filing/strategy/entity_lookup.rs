//! Named-entity lookups inside a window next to an anchor.

use regex::Regex;
use tracing::debug;

use super::{squash_whitespace, ExtractContext, Strategy};
use crate::models::{Field, FieldValue};
use crate::nlp::EntityLabel;
use crate::text::{Anchor, AnchorMatch, Direction, Occurrence, Window};

/// Which entity texts are acceptable.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityFilter {
    /// Texts must be strictly longer than this many characters.
    pub min_len: usize,
    /// Texts containing any of these are dropped.
    pub reject_tokens: &'static [&'static str],
    /// Texts must contain this token.
    pub must_contain: Option<&'static str>,
    /// Texts already present in this resolved list field are dropped.
    pub exclude_field: Option<Field>,
}

impl EntityFilter {
    fn accepts(&self, candidate: &str, ctx: &ExtractContext<'_>) -> bool {
        if candidate.chars().count() <= self.min_len {
            return false;
        }
        if self.reject_tokens.iter().any(|t| candidate.contains(t)) {
            return false;
        }
        if let Some(token) = self.must_contain {
            if !candidate.contains(token) {
                return false;
            }
        }
        if let Some(field) = self.exclude_field {
            if ctx.resolved.list(field).iter().any(|existing| existing == candidate) {
                return false;
            }
        }
        true
    }
}

/// How many entities make a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collect {
    /// The first acceptable entity, as text.
    First,
    /// Every acceptable entity, deduplicated in document order. Anchors that
    /// yield fewer than `min_items` are passed over.
    All { min_items: usize },
}

/// Skip an anchor when `pattern` occurs within `within` characters from it.
#[derive(Debug, Clone, Copy)]
pub struct SkipWhen {
    pub pattern: &'static Regex,
    pub within: usize,
}

/// Ask the classifier for entities of one label near an anchor.
pub struct EntityLookupStrategy {
    name: &'static str,
    anchor: Anchor,
    direction: Direction,
    max_chars: usize,
    occurrence: Occurrence,
    label: EntityLabel,
    filter: EntityFilter,
    collect: Collect,
    skip_when: Option<SkipWhen>,
}

impl EntityLookupStrategy {
    pub fn new(name: &'static str, label: EntityLabel, anchor: Anchor, max_chars: usize) -> Self {
        Self {
            name,
            anchor,
            direction: Direction::FromAnchor,
            max_chars,
            occurrence: Occurrence::First,
            label,
            filter: EntityFilter::default(),
            collect: Collect::First,
            skip_when: None,
        }
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn occurrence(mut self, occurrence: Occurrence) -> Self {
        self.occurrence = occurrence;
        self
    }

    pub fn filter(mut self, filter: EntityFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn collect(mut self, collect: Collect) -> Self {
        self.collect = collect;
        self
    }

    pub fn skip_when(mut self, pattern: &'static Regex, within: usize) -> Self {
        self.skip_when = Some(SkipWhen { pattern, within });
        self
    }

    fn at_anchor(&self, anchor: AnchorMatch, ctx: &ExtractContext<'_>) -> Option<FieldValue> {
        if let Some(skip) = &self.skip_when {
            let head = Window::cut(ctx.text, anchor, Direction::FromAnchor, skip.within);
            if skip.pattern.is_match(head.text()) {
                debug!("{}: anchor at {} skipped", self.name, anchor.start);
                return None;
            }
        }

        let window = Window::cut(ctx.text, anchor, self.direction, self.max_chars);
        let mut accepted: Vec<String> = Vec::new();
        for raw in ctx.entities.entities(window.text(), self.label) {
            let candidate = squash_whitespace(raw);
            if !self.filter.accepts(&candidate, ctx) || accepted.contains(&candidate) {
                continue;
            }
            if self.collect == Collect::First {
                return Some(FieldValue::Text(candidate));
            }
            accepted.push(candidate);
        }

        match self.collect {
            Collect::All { min_items } if accepted.len() >= min_items.max(1) => {
                Some(FieldValue::List(accepted))
            }
            Collect::All { .. } => {
                debug!("{}: {} entities at {} is below the minimum", self.name, accepted.len(), anchor.start);
                None
            }
            Collect::First => None,
        }
    }
}

impl Strategy for EntityLookupStrategy {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, ctx: &ExtractContext<'_>) -> Option<FieldValue> {
        self.anchor
            .find(ctx.text, self.occurrence)
            .into_iter()
            .find_map(|anchor| self.at_anchor(anchor, ctx))
    }
}
