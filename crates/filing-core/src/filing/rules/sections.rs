//! Rules that summarize a whole section window.

use super::patterns::INCORPORATED_BY_REFERENCE;
use super::tables::PROXY_SENTINEL;
use crate::text::Window;

/// The window trimmed and marked as truncated.
pub fn excerpt(window: &Window<'_>) -> Option<String> {
    let text = window.text().trim();
    (!text.is_empty()).then(|| format!("{}...", text))
}

/// The window on one line.
pub fn one_line(window: &Window<'_>) -> Option<String> {
    let text = window.text().trim().replace('\n', " ");
    (!text.is_empty()).then_some(text)
}

/// Directors sentinel when the caption defers to the proxy statement.
pub fn proxy_reference(window: &Window<'_>) -> Option<String> {
    INCORPORATED_BY_REFERENCE
        .is_match(window.text())
        .then(|| PROXY_SENTINEL.to_string())
}

/// Whether the beneficial-ownership section mentions a parent company.
pub fn parent_mention(window: &Window<'_>) -> Option<String> {
    let summary = if window.text().contains("Parent") {
        "Parent company mentioned in Security Ownership section"
    } else {
        "No parent company explicitly identified in Security Ownership section"
    };
    Some(summary.to_string())
}

/// How the beneficial-ownership section presents its data.
pub fn security_ownership(window: &Window<'_>) -> Option<String> {
    let lowered = window.text().to_lowercase();
    if lowered.contains("incorporated") && lowered.contains("reference") && lowered.contains("proxy statement") {
        return Some("Incorporated by reference from Proxy Statement".to_string());
    }
    if window.text().contains("Name of Beneficial Owner") {
        return Some("Contains Security Ownership table (Item 12)".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Direction;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_excerpt_and_one_line() {
        let window = Window::new("  Item 1. Business\nWe make widgets.\n", Direction::FromAnchor);
        assert_eq!(excerpt(&window), Some("Item 1. Business\nWe make widgets....".to_string()));
        assert_eq!(one_line(&window), Some("Item 1. Business We make widgets.".to_string()));
        assert_eq!(excerpt(&Window::new("  ", Direction::FromAnchor)), None);
    }

    #[test]
    fn test_proxy_reference() {
        let window = Window::new("Item 10. Directors\nThe information is Incorporated By Reference", Direction::FromAnchor);
        assert_eq!(proxy_reference(&window), Some(PROXY_SENTINEL.to_string()));
        assert_eq!(proxy_reference(&Window::new("Jane Roe", Direction::FromAnchor)), None);
    }

    #[test]
    fn test_security_ownership_variants() {
        let proxy = Window::new(
            "Security Ownership ... incorporated herein by reference to our Proxy Statement",
            Direction::FromAnchor,
        );
        assert_eq!(
            security_ownership(&proxy),
            Some("Incorporated by reference from Proxy Statement".to_string())
        );

        let table = Window::new("Name of Beneficial Owner  Shares", Direction::FromAnchor);
        assert_eq!(
            security_ownership(&table),
            Some("Contains Security Ownership table (Item 12)".to_string())
        );

        assert_eq!(security_ownership(&Window::new("see below", Direction::FromAnchor)), None);
    }
}
