//! Card extraction.

use std::sync::LazyLock;

use log::{debug, warn};
use scraper::{ElementRef, Html};

use crate::config::{CompiledSelectors, ProfileSelectors, DEFAULT_SELECTORS};
use crate::models::{TechnologyProfile, Techniques};

static SELECTORS: LazyLock<CompiledSelectors> = LazyLock::new(|| DEFAULT_SELECTORS.compile());

/// Extracts the technology profile from a profile page using the default selectors.
///
/// A page without cards (unknown markup, a block page, a domain the site knows
/// nothing about) yields an empty profile, not an error.
pub fn extract_profile(html: &str) -> TechnologyProfile {
    extract_with_compiled(html, &SELECTORS)
}

/// Same as [`extract_profile`] with a caller-supplied selector set.
pub fn extract_profile_with(html: &str, selectors: &ProfileSelectors) -> TechnologyProfile {
    extract_with_compiled(html, &selectors.compile())
}

fn extract_with_compiled(html: &str, selectors: &CompiledSelectors) -> TechnologyProfile {
    let document = Html::parse_document(html);
    let mut profile = TechnologyProfile::new();

    let mut card_count = 0usize;
    for card in document.select(&selectors.card) {
        card_count += 1;

        let Some(title) = card.select(&selectors.card_title).next().map(element_text) else {
            warn!("Skipping card #{} without a title element", card_count);
            continue;
        };

        let techniques = extract_techniques(card, selectors, &title);
        debug!("Card '{}': {} technique(s)", title, techniques.len());
        profile.insert_category(title, techniques);
    }

    debug!(
        "Found {} card(s), {} categor{} extracted",
        card_count,
        profile.category_count(),
        if profile.category_count() == 1 { "y" } else { "ies" }
    );
    profile
}

/// Pairs label[i] with description[i]; extra entries on the longer side are dropped.
fn extract_techniques(card: ElementRef<'_>, selectors: &CompiledSelectors, title: &str) -> Techniques {
    let labels: Vec<String> = card
        .select(&selectors.technique_label)
        .map(element_text)
        .collect();
    let descriptions: Vec<String> = card
        .select(&selectors.technique_description)
        .map(element_text)
        .collect();

    if labels.len() != descriptions.len() {
        warn!(
            "Card '{}' has {} label(s) but {} description(s); keeping {} pair(s)",
            title,
            labels.len(),
            descriptions.len(),
            labels.len().min(descriptions.len())
        );
    }

    labels.into_iter().zip(descriptions).collect()
}

/// All descendant text nodes of an element, concatenated as-is.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}
