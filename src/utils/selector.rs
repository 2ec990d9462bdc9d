//! CSS selector parsing utilities.

use scraper::Selector;

/// Selector that never matches an element.
const MATCH_NOTHING: &str = "*:not(*)";

/// Parses a CSS selector with a safe fallback.
///
/// If parsing fails, logs an error and returns a selector that matches nothing
/// (`*:not(*)`). This prevents panics while allowing the code to continue.
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `context` - Context description for error logging (e.g., "card title")
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse CSS selector '{}' for {}: {}. Using fallback selector.",
            selector_str,
            context,
            e
        );
        Selector::parse(MATCH_NOTHING).expect(
            "Fallback selector '*:not(*)' should always parse - this is a programming error",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_selector_is_kept() {
        let selector = parse_selector_with_fallback(".card-title", "test");
        let html = scraper::Html::parse_fragment(r#"<h6 class="card-title">CMS</h6>"#);
        assert_eq!(html.select(&selector).count(), 1);
    }

    #[test]
    fn test_invalid_selector_falls_back() {
        let selector = parse_selector_with_fallback(">>>", "test");
        let html = scraper::Html::parse_fragment("<div><p>x</p></div>");
        assert_eq!(html.select(&selector).count(), 0);
    }
}
