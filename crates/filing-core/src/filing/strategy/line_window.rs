//! Line scans over a window next to an anchor.

use tracing::trace;

use super::{ExtractContext, Strategy};
use crate::models::FieldValue;
use crate::text::{Anchor, Direction, Occurrence, Window};

/// Turns a window into a value, usually by walking its lines.
pub type LineRule = fn(&Window<'_>) -> Option<String>;

/// Cut a window at each anchor occurrence and apply a line rule until one
/// produces a value.
pub struct LineWindowStrategy {
    name: &'static str,
    anchor: Anchor,
    direction: Direction,
    max_chars: Option<usize>,
    occurrence: Occurrence,
    rule: LineRule,
}

impl LineWindowStrategy {
    pub fn new(name: &'static str, anchor: Anchor, direction: Direction, rule: LineRule) -> Self {
        Self {
            name,
            anchor,
            direction,
            max_chars: None,
            occurrence: Occurrence::First,
            rule,
        }
    }

    pub fn max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = Some(max_chars);
        self
    }

    pub fn occurrence(mut self, occurrence: Occurrence) -> Self {
        self.occurrence = occurrence;
        self
    }
}

impl Strategy for LineWindowStrategy {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, ctx: &ExtractContext<'_>) -> Option<FieldValue> {
        let max_chars = self.max_chars.unwrap_or(usize::MAX);
        self.anchor
            .find(ctx.text, self.occurrence)
            .into_iter()
            .find_map(|anchor| {
                let window = Window::cut(ctx.text, anchor, self.direction, max_chars);
                let value = (self.rule)(&window);
                trace!("{}: anchor at {} -> {:?}", self.name, anchor.start, value);
                value
            })
            .filter(|v| !v.trim().is_empty())
            .map(FieldValue::Text)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{run, text};
    use super::*;
    use lazy_static::lazy_static;
    use pretty_assertions::assert_eq;
    use regex::Regex;

    lazy_static! {
        static ref SECTION: Regex = Regex::new(r"Section").unwrap();
    }

    fn marked_line(window: &Window<'_>) -> Option<String> {
        window
            .outward_lines()
            .into_iter()
            .find(|l| l.starts_with('*'))
            .map(|l| l.trim_start_matches('*').to_string())
    }

    #[test]
    fn test_first_anchor_only_by_default() {
        let strategy = LineWindowStrategy::new("marked", Anchor::Pattern(&SECTION), Direction::Forward, marked_line)
            .max_chars(10);
        let doc = "Section\nplain\nSection\n*starred";
        assert_eq!(run(&strategy, doc), None);
    }

    #[test]
    fn test_all_anchors_in_order() {
        let strategy = LineWindowStrategy::new("marked", Anchor::Pattern(&SECTION), Direction::Forward, marked_line)
            .max_chars(10)
            .occurrence(Occurrence::All);
        let doc = "Section\nplain\nSection\n*one\nSection\n*two";
        assert_eq!(text(run(&strategy, doc)), Some("one".to_string()));
    }

    #[test]
    fn test_reverse_anchors() {
        let strategy = LineWindowStrategy::new("marked", Anchor::Pattern(&SECTION), Direction::Forward, marked_line)
            .max_chars(10)
            .occurrence(Occurrence::Reverse);
        let doc = "Section\nplain\nSection\n*one\nSection\n*two";
        assert_eq!(text(run(&strategy, doc)), Some("two".to_string()));
    }
}
