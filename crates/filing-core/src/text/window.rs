//! Bounded substrings around anchors.

use super::anchor::AnchorMatch;

/// Which side of the anchor a window covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Text after the anchor, starting at its end.
    Forward,
    /// Text before the anchor, ending at its start.
    Backward,
    /// Text starting at the anchor itself, label included.
    FromAnchor,
}

/// Byte length of the first `max_chars` characters of `text`.
fn prefix_len(text: &str, max_chars: usize) -> usize {
    text.char_indices()
        .nth(max_chars)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// The first `max_chars` characters of `text`.
pub fn prefix(text: &str, max_chars: usize) -> &str {
    &text[..prefix_len(text, max_chars)]
}

/// The last `max_chars` characters of `text`.
pub fn suffix(text: &str, max_chars: usize) -> &str {
    if max_chars == 0 {
        return "";
    }
    let start = text
        .char_indices()
        .rev()
        .nth(max_chars - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    &text[start..]
}

/// Cut a window of at most `max_chars` characters next to `anchor`.
pub fn window(text: &str, anchor: AnchorMatch, direction: Direction, max_chars: usize) -> &str {
    match direction {
        Direction::Forward => prefix(&text[anchor.end..], max_chars),
        Direction::FromAnchor => prefix(&text[anchor.start..], max_chars),
        Direction::Backward => suffix(&text[..anchor.start], max_chars),
    }
}

/// A window plus the side of the anchor it was cut from.
#[derive(Debug, Clone, Copy)]
pub struct Window<'t> {
    text: &'t str,
    direction: Direction,
}

impl<'t> Window<'t> {
    pub fn new(text: &'t str, direction: Direction) -> Self {
        Self { text, direction }
    }

    /// Cut a window from `text` next to `anchor`.
    pub fn cut(text: &'t str, anchor: AnchorMatch, direction: Direction, max_chars: usize) -> Self {
        Self::new(window(text, anchor, direction, max_chars), direction)
    }

    pub fn text(&self) -> &'t str {
        self.text
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Raw lines of the window.
    pub fn lines(&self) -> impl DoubleEndedIterator<Item = &'t str> + 't {
        self.text.split('\n')
    }

    /// Lines that follow the anchor's own line.
    ///
    /// For forward windows the first line is the remainder of the label
    /// line and is skipped. Backward windows keep every line.
    pub fn body_lines(&self) -> impl DoubleEndedIterator<Item = &'t str> + 't {
        let skip = usize::from(self.direction != Direction::Backward);
        let mut lines = self.text.split('\n');
        for _ in 0..skip {
            lines.next();
        }
        lines
    }

    /// Trimmed, non-empty lines walking away from the anchor.
    ///
    /// Forward windows yield lines in document order, backward windows
    /// yield them nearest-first.
    pub fn outward_lines(&self) -> Vec<&'t str> {
        let lines = self.body_lines().map(str::trim).filter(|l| !l.is_empty());
        match self.direction {
            Direction::Backward => lines.rev().collect(),
            _ => lines.collect(),
        }
    }
}

/// Collect lines until one contains a terminator keyword. The terminating
/// line is not included.
pub fn lines_until<'t, I>(lines: I, terminators: &[&str]) -> Vec<&'t str>
where
    I: IntoIterator<Item = &'t str>,
{
    lines
        .into_iter()
        .take_while(|line| !terminators.iter().any(|t| line.contains(t)))
        .collect()
}
