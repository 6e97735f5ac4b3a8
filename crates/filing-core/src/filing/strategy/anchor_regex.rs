//! Regex extraction inside a window next to an anchor.

use regex::{Captures, Regex};
use tracing::trace;

use super::{ExtractContext, Strategy};
use crate::models::FieldValue;
use crate::text::{Anchor, Direction, Occurrence, Window};

/// How a match becomes a value.
#[derive(Clone, Copy)]
pub enum Capture {
    /// The whole match.
    Whole,
    /// One capture group.
    Group(usize),
    /// One capture group behind a fixed label.
    Prefixed(&'static str, usize),
    /// Custom conversion. Returning `None` moves on to the next match.
    With(fn(&Captures<'_>, &ExtractContext<'_>) -> Option<String>),
}

impl Capture {
    fn value(&self, caps: &Captures<'_>, ctx: &ExtractContext<'_>) -> Option<String> {
        let group = |i: usize| caps.get(i).map(|m| m.as_str().trim().to_string());
        match self {
            Capture::Whole => group(0),
            Capture::Group(i) => group(*i),
            Capture::Prefixed(label, i) => group(*i).map(|v| format!("{}{}", label, v)),
            Capture::With(f) => f(caps, ctx),
        }
    }
}

/// Which match in the window wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    First,
    Last,
}

/// Search a window for `pattern` and convert the winning match.
pub struct AnchorRegexStrategy {
    name: &'static str,
    anchor: Anchor,
    direction: Direction,
    max_chars: Option<usize>,
    pattern: &'static Regex,
    capture: Capture,
    pick: Pick,
    flatten_newlines: bool,
}

impl AnchorRegexStrategy {
    pub fn new(name: &'static str, pattern: &'static Regex, capture: Capture) -> Self {
        Self {
            name,
            anchor: Anchor::Start,
            direction: Direction::FromAnchor,
            max_chars: None,
            pattern,
            capture,
            pick: Pick::First,
            flatten_newlines: false,
        }
    }

    /// Search only the first `max_chars` characters of the document.
    pub fn within_prefix(mut self, max_chars: usize) -> Self {
        self.anchor = Anchor::Start;
        self.direction = Direction::FromAnchor;
        self.max_chars = Some(max_chars);
        self
    }

    /// Search a window next to `anchor`.
    pub fn near(mut self, anchor: Anchor, direction: Direction, max_chars: usize) -> Self {
        self.anchor = anchor;
        self.direction = direction;
        self.max_chars = Some(max_chars);
        self
    }

    pub fn pick(mut self, pick: Pick) -> Self {
        self.pick = pick;
        self
    }

    /// Replace line breaks with spaces before matching.
    pub fn flatten_newlines(mut self) -> Self {
        self.flatten_newlines = true;
        self
    }

    fn search(&self, window: &str, ctx: &ExtractContext<'_>) -> Option<String> {
        let mut matches = self.pattern.captures_iter(window);
        match self.pick {
            Pick::First => matches.find_map(|caps| self.capture.value(&caps, ctx)),
            Pick::Last => matches
                .collect::<Vec<_>>()
                .iter()
                .rev()
                .find_map(|caps| self.capture.value(caps, ctx)),
        }
    }
}

impl Strategy for AnchorRegexStrategy {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, ctx: &ExtractContext<'_>) -> Option<FieldValue> {
        let anchor = self.anchor.find(ctx.text, Occurrence::First).into_iter().next()?;
        let max_chars = self.max_chars.unwrap_or(usize::MAX);
        let window = Window::cut(ctx.text, anchor, self.direction, max_chars).text();
        trace!("{}: searching {} bytes", self.name, window.len());

        let value = if self.flatten_newlines {
            self.search(&window.replace('\n', " "), ctx)
        } else {
            self.search(window, ctx)
        };

        value.filter(|v| !v.is_empty()).map(FieldValue::Text)
    }
}
