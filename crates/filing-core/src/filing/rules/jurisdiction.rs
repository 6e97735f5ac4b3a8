//! Jurisdiction-of-incorporation line rules.

use super::patterns::TAX_ID_LINE;
use crate::text::Window;

/// Nearest line above the jurisdiction caption that is neither a tax
/// identifier nor another caption.
pub fn line_above_caption(window: &Window<'_>) -> Option<String> {
    window
        .outward_lines()
        .into_iter()
        .filter(|line| !TAX_ID_LINE.is_match(line) && !line.starts_with('('))
        .find(|line| line.chars().count() > 2)
        .map(str::to_string)
}

/// First line below the jurisdiction caption.
pub fn line_below_caption(window: &Window<'_>) -> Option<String> {
    window
        .outward_lines()
        .into_iter()
        .find(|line| line.chars().count() > 2)
        .map(str::to_string)
}
