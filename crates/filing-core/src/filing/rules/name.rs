//! Registrant-name line rules.

use super::patterns::BUSINESS_NAME;
use super::tables::{LEGAL_SUFFIXES, NAME_NOISE};
use crate::text::Window;

/// Whether any whitespace/comma separated token is a legal-form suffix.
pub fn has_legal_suffix_token(line: &str) -> bool {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .any(|token| LEGAL_SUFFIXES.contains(&token))
}

/// Whether the line ends with a legal-form suffix, as written or upper-cased.
pub fn ends_with_legal_suffix(line: &str) -> bool {
    LEGAL_SUFFIXES
        .iter()
        .any(|suffix| line.ends_with(suffix) || line.ends_with(&suffix.to_uppercase()))
}

/// At least one letter and no lower-case letters.
pub fn is_upper_case(line: &str) -> bool {
    line.chars().any(char::is_alphabetic) && !line.chars().any(char::is_lowercase)
}

/// Line under the charter-name caption that looks like an entity name.
pub fn charter_name_line(window: &Window<'_>) -> Option<String> {
    window
        .outward_lines()
        .into_iter()
        .filter(|line| line.chars().count() > 3)
        .filter(|line| !line.contains("Commission") && !line.contains("Exact name"))
        .find(|line| has_legal_suffix_token(line) || is_upper_case(line))
        .map(str::to_string)
}

/// First short cover-page line ending in a legal-form suffix.
pub fn suffix_line(window: &Window<'_>) -> Option<String> {
    window
        .lines()
        .map(str::trim)
        .filter(|line| ends_with_legal_suffix(line))
        .filter(|line| !NAME_NOISE.iter().any(|noise| line.contains(noise)))
        .find(|line| line.chars().count() < 100)
        .map(str::to_string)
}

/// Capitalized phrase ending in a legal suffix inside the business section.
pub fn business_section_name(window: &Window<'_>) -> Option<String> {
    let caps = BUSINESS_NAME.captures(window.text())?;
    let candidate = caps.get(1)?.as_str().trim();
    let candidate = candidate.rsplit('\n').next().unwrap_or(candidate).trim();
    if candidate.chars().count() > 3 && !candidate.contains("The") {
        Some(candidate.to_string())
    } else {
        None
    }
}

/// Nearest substantial line above the charter-name caption.
pub fn line_above_caption(window: &Window<'_>) -> Option<String> {
    window
        .outward_lines()
        .into_iter()
        .find(|line| line.chars().count() > 3 && !line.contains("Commission"))
        .map(str::to_string)
}

/// First substantial line below the charter-name caption.
pub fn line_below_caption(window: &Window<'_>) -> Option<String> {
    window
        .outward_lines()
        .into_iter()
        .find(|line| line.chars().count() > 3 && !line.contains("Commission") && !line.contains("Exact name"))
        .map(str::to_string)
}

/// Nearest line above the former-name caption.
pub fn former_name_line(window: &Window<'_>) -> Option<String> {
    window
        .outward_lines()
        .into_iter()
        .find(|line| !line.starts_with('('))
        .map(str::to_string)
}

/// The line right after the FILER label of a holdings report.
pub fn filer_line(window: &Window<'_>) -> Option<String> {
    let line = window.body_lines().next()?.trim();
    (!line.is_empty() && !line.contains("CIK")).then(|| line.to_string())
}

/// The line after `Name:` in the manager block of a holdings report.
pub fn manager_name(window: &Window<'_>) -> Option<String> {
    let mut lines = window.lines();
    lines.by_ref().find(|line| line.contains("Name:"))?;
    let name = lines.next()?.trim();
    (!name.is_empty()).then(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Direction;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_suffix_tokens() {
        assert!(has_legal_suffix_token("Acme Widgets, Inc."));
        assert!(has_legal_suffix_token("Globex Corporation"));
        assert!(!has_legal_suffix_token("Incoming Shipments"));
        assert!(ends_with_legal_suffix("ACME HOLDINGS PLC"));
        assert!(ends_with_legal_suffix("Initech LTD."));
    }

    #[test]
    fn test_upper_case() {
        assert!(is_upper_case("ACME WIDGETS INC"));
        assert!(!is_upper_case("Acme Widgets"));
        assert!(!is_upper_case("001-12345"));
    }

    #[test]
    fn test_charter_name_line() {
        let window = Window::new(")\n\nACME WIDGETS INC\nCommission File Number", Direction::Forward);
        assert_eq!(charter_name_line(&window), Some("ACME WIDGETS INC".to_string()));

        let window = Window::new("\nlowercase words only\n(Commission File Number)", Direction::Forward);
        assert_eq!(charter_name_line(&window), None);
    }

    #[test]
    fn test_suffix_line_skips_noise() {
        let window = Window::new(
            "SECURITIES AND EXCHANGE COMMISSION\nAddress of Acme Corp.\nInitech Holdings Corp.\n",
            Direction::FromAnchor,
        );
        assert_eq!(suffix_line(&window), Some("Initech Holdings Corp.".to_string()));
    }

    #[test]
    fn test_business_section_keeps_last_line() {
        let window = Window::new(
            "Item 1. Business\n\nCVS Health Corporation, together with its subsidiaries",
            Direction::FromAnchor,
        );
        assert_eq!(business_section_name(&window), Some("CVS Health Corporation".to_string()));

        let window = Window::new("Item 1. Business\nThe Acme Corp", Direction::FromAnchor);
        assert_eq!(business_section_name(&window), None);
    }

    #[test]
    fn test_former_name_line() {
        let window = Window::new("Acme Old Name\n(", Direction::Backward);
        assert_eq!(former_name_line(&window), Some("Acme Old Name".to_string()));
    }

    #[test]
    fn test_holdings_report_names() {
        let window = Window::new("\nBRIDGEWATER ASSOCIATES, LP\nCIK 0001350694", Direction::Forward);
        assert_eq!(filer_line(&window), Some("BRIDGEWATER ASSOCIATES, LP".to_string()));

        let window = Window::new(" Filing this Report:\nName:\nAcme Capital LLC\nAddress:", Direction::FromAnchor);
        assert_eq!(manager_name(&window), Some("Acme Capital LLC".to_string()));
    }
}
