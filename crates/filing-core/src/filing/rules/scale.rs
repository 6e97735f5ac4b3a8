//! Unit qualifiers for reported amounts.

use regex::Captures;
use tracing::trace;

use super::patterns::STATEMENTS_OF_OPERATIONS;
use crate::filing::strategy::ExtractContext;
use crate::text::{prefix, Direction, Window};

/// Characters of the statements section searched for a local qualifier.
pub const STATEMENTS_WINDOW: usize = 5000;

/// Characters of the document searched for a global qualifier.
const DOCUMENT_PREFIX: usize = 100_000;

/// Multiplier a filing states its amounts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Thousand,
    Million,
    Billion,
}

impl Scale {
    pub fn suffix(&self) -> &'static str {
        match self {
            Scale::Thousand => " thousand",
            Scale::Million => " million",
            Scale::Billion => " billion",
        }
    }
}

const SECTION_PHRASES: &[(&str, Scale)] = &[
    ("(in millions", Scale::Million),
    ("(in thousands", Scale::Thousand),
];

const DOCUMENT_PHRASES: &[(&str, Scale)] = &[
    ("in millions", Scale::Million),
    ("in thousands", Scale::Thousand),
    ("in billions", Scale::Billion),
];

fn first_phrase(haystack: &str, phrases: &[(&str, Scale)]) -> Option<Scale> {
    let lowered = haystack.to_lowercase();
    phrases
        .iter()
        .find(|(phrase, _)| lowered.contains(phrase))
        .map(|&(_, scale)| scale)
}

/// Resolve the scale of a document's amounts. A qualifier in the
/// statements section wins over one anywhere in the document prefix.
pub fn resolve_scale(text: &str) -> Option<Scale> {
    let section = STATEMENTS_OF_OPERATIONS.find(text).and_then(|m| {
        let window = Window::cut(text, m.into(), Direction::FromAnchor, STATEMENTS_WINDOW);
        first_phrase(window.text(), SECTION_PHRASES)
    });
    let scale = section.or_else(|| first_phrase(prefix(text, DOCUMENT_PREFIX), DOCUMENT_PHRASES));
    trace!("resolved scale {:?}", scale);
    scale
}

/// Dollar amount with its digit grouping kept and the document scale appended.
pub fn revenue_value(caps: &Captures<'_>, ctx: &ExtractContext<'_>) -> Option<String> {
    let digits = caps.get(1)?.as_str();
    let suffix = resolve_scale(ctx.text).map(|s| s.suffix()).unwrap_or("");
    Some(format!("${}{}", digits, suffix))
}
