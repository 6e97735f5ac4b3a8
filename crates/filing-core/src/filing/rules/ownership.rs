//! Ownership rules for holdings and ownership-change filings.

use std::collections::BTreeSet;

use tracing::debug;

use super::patterns::{CLASS_CODE, SECURITY_ID};
use super::tables::{HOLDING_NOISE, MAX_HOLDINGS};
use crate::text::Window;

/// Issuer names from `(name, class code, security id)` line triplets.
///
/// Holdings tables come out of text extraction one cell per line, so an
/// issuer is a line followed by a class-code line and a nine-character
/// identifier line. Names are deduplicated and sorted.
pub fn holding_names(text: &str) -> BTreeSet<String> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    lines
        .windows(3)
        .filter(|w| CLASS_CODE.is_match(w[1]) && SECURITY_ID.is_match(w[2]))
        .map(|w| w[0])
        .filter(|name| name.chars().count() > 2)
        .filter(|name| !HOLDING_NOISE.contains(name))
        .map(str::to_string)
        .collect()
}

/// Holdings summary over the whole window.
pub fn holdings(window: &Window<'_>) -> Option<String> {
    let names = holding_names(window.text());
    debug!("found {} distinct holdings", names.len());
    if names.is_empty() {
        return None;
    }
    let listed: Vec<String> = names.into_iter().take(MAX_HOLDINGS).collect();
    Some(format!("Holdings include: {}...", listed.join(", ")))
}

/// Reporting person named on an ownership-change statement.
pub fn reporting_person(window: &Window<'_>) -> Option<String> {
    let name = window.body_lines().map(str::trim).find(|l| !l.is_empty())?;
    Some(format!("Reporting Person: {}", name))
}

/// Ownership fallback for a holdings report without a readable table.
pub fn manager_report(name: &str) -> Option<String> {
    let name = name.trim();
    (!name.is_empty()).then(|| format!("Report filed by {} (Institutional Investment Manager)", name))
}
