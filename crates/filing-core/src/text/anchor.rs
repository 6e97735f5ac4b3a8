//! Label-phrase location.

use regex::{Regex, RegexBuilder};

/// A located label phrase, as byte offsets into the searched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorMatch {
    pub start: usize,
    pub end: usize,
}

impl AnchorMatch {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl From<regex::Match<'_>> for AnchorMatch {
    fn from(m: regex::Match<'_>) -> Self {
        Self::new(m.start(), m.end())
    }
}

/// Which occurrences of an anchor a caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Occurrence {
    /// Only the first occurrence.
    #[default]
    First,
    /// Every occurrence, in document order.
    All,
    /// Every occurrence, last one first.
    Reverse,
}

/// Build a regex for a label phrase whose words may be separated by any
/// run of whitespace, line breaks included.
pub fn phrase_pattern(phrase: &str, case_sensitive: bool) -> Result<Regex, regex::Error> {
    let body = phrase
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    RegexBuilder::new(&body)
        .case_insensitive(!case_sensitive)
        .build()
}

/// Position of the first occurrence of `phrase`.
pub fn locate(text: &str, phrase: &str, case_sensitive: bool) -> Option<AnchorMatch> {
    let pattern = phrase_pattern(phrase, case_sensitive).ok()?;
    pattern.find(text).map(AnchorMatch::from)
}

/// Occurrences of `pattern` in the order the caller asked for.
pub fn locate_all(text: &str, pattern: &Regex, occurrence: Occurrence) -> Vec<AnchorMatch> {
    match occurrence {
        Occurrence::First => pattern.find(text).map(AnchorMatch::from).into_iter().collect(),
        Occurrence::All => pattern.find_iter(text).map(AnchorMatch::from).collect(),
        Occurrence::Reverse => {
            let mut found: Vec<AnchorMatch> = pattern.find_iter(text).map(AnchorMatch::from).collect();
            found.reverse();
            found
        }
    }
}

/// Where a strategy's window is anchored.
#[derive(Debug, Clone)]
pub enum Anchor {
    /// Start of the document.
    Start,
    /// A single label pattern.
    Pattern(&'static Regex),
    /// The first pattern in the list that occurs anywhere.
    FirstOf(Vec<&'static Regex>),
    /// The second pattern, searched from the end of the first occurrence of the first.
    After(&'static Regex, &'static Regex),
}

impl Anchor {
    /// Resolve the anchor against `text`.
    pub fn find(&self, text: &str, occurrence: Occurrence) -> Vec<AnchorMatch> {
        match self {
            Anchor::Start => vec![AnchorMatch::new(0, 0)],
            Anchor::Pattern(pattern) => locate_all(text, pattern, occurrence),
            Anchor::FirstOf(patterns) => patterns
                .iter()
                .map(|p| locate_all(text, p, occurrence))
                .find(|found| !found.is_empty())
                .unwrap_or_default(),
            Anchor::After(outer, inner) => {
                let Some(base) = outer.find(text) else {
                    return Vec::new();
                };
                let offset = base.end();
                locate_all(&text[offset..], inner, occurrence)
                    .into_iter()
                    .map(|m| AnchorMatch::new(m.start + offset, m.end + offset))
                    .collect()
            }
        }
    }
}
