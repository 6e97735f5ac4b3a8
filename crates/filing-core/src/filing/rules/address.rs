//! Principal-office address rules.

use regex::Captures;

use super::patterns::{FIVE_DIGITS, ZIP_CODE};
use crate::filing::strategy::ExtractContext;
use crate::text::{lines_until, Window};

const MAX_ADDRESS_LINES: usize = 4;

/// Labels of neighbouring cover-page fields that end a backward walk.
const BACKWARD_STOPS: &[&str] = &["I.R.S.", "State or other", "incorporation", "Identification No."];

/// Labels that end a forward walk.
const FORWARD_STOPS: &[&str] = &["Telephone", "Securities", "Indicate by check mark"];

/// Address statutory citations are mistaken for.
const CITATION_NOISE: &[&str] = &["Act", "Section", "Commission"];

/// Walk up from the caption collecting address lines.
pub fn lines_above_caption(window: &Window<'_>) -> Option<String> {
    let mut collected: Vec<&str> = Vec::new();
    for line in lines_until(window.outward_lines(), BACKWARD_STOPS) {
        if line.contains("Zip Code") || line.starts_with('(') {
            continue;
        }
        collected.push(line);
        if collected.len() >= MAX_ADDRESS_LINES {
            break;
        }
    }
    collected.reverse();
    (!collected.is_empty()).then(|| collected.join(", "))
}

/// Walk down from the caption collecting address lines until a postal code.
pub fn lines_below_caption(window: &Window<'_>) -> Option<String> {
    let mut collected: Vec<String> = Vec::new();
    for line in lines_until(window.body_lines(), FORWARD_STOPS) {
        if line.contains("Zip Code") {
            if let Some(zip) = ZIP_CODE.find(line) {
                collected.push(line[..zip.end()].trim().to_string());
            }
            break;
        }
        let trimmed = line.trim();
        if FIVE_DIGITS.is_match(line) {
            collected.push(trimmed.to_string());
            break;
        }
        if !trimmed.is_empty() {
            collected.push(trimmed.to_string());
        }
    }
    (!collected.is_empty()).then(|| collected.join(", "))
}

/// Street-address match with its line breaks turned into separators.
/// Matches that read like statutory citations are passed over.
pub fn street_address(caps: &Captures<'_>, _ctx: &ExtractContext<'_>) -> Option<String> {
    let raw = caps.get(0)?.as_str();
    if CITATION_NOISE.iter().any(|noise| raw.contains(noise)) {
        return None;
    }
    let joined = raw
        .split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    Some(joined)
}
