//! CSS selectors for the profile page.
//!
//! The profile page groups detected technologies into "cards". The class names
//! below are the only coupling to the site's markup; when the markup changes,
//! update [`DEFAULT_SELECTORS`] and nothing else.
//!
//! Each selector is a compound class selector, so it is wider than matching
//! the `class` attribute string exactly: `.card.mt-4.mb-2` also matches
//! `class="mb-2 card mt-4 shadow"`. Class order and extra classes are ignored.

use scraper::Selector;

use crate::utils::parse_selector_with_fallback;

/// Selector strings used to pull a profile out of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileSelectors {
    /// One card per technology category.
    pub card: &'static str,
    /// Category name inside a card (first match wins).
    pub card_title: &'static str,
    /// Technique names inside a card, in document order.
    pub technique_label: &'static str,
    /// Technique descriptions inside a card, parallel to `technique_label`.
    pub technique_description: &'static str,
}

/// Selector set matching the site's markup.
pub const DEFAULT_SELECTORS: ProfileSelectors = ProfileSelectors {
    card: ".card.mt-4.mb-2",
    card_title: ".card-title",
    technique_label: ".text-dark",
    technique_description: ".pb-0.mb-0.small",
};

impl Default for ProfileSelectors {
    fn default() -> Self {
        DEFAULT_SELECTORS
    }
}

/// Parsed form of [`ProfileSelectors`].
#[derive(Debug, Clone)]
pub(crate) struct CompiledSelectors {
    pub card: Selector,
    pub card_title: Selector,
    pub technique_label: Selector,
    pub technique_description: Selector,
}

impl ProfileSelectors {
    /// Parses every selector string. Malformed strings degrade to a selector
    /// that matches nothing, so extraction yields an empty profile instead of failing.
    pub(crate) fn compile(&self) -> CompiledSelectors {
        CompiledSelectors {
            card: parse_selector_with_fallback(self.card, "profile card"),
            card_title: parse_selector_with_fallback(self.card_title, "card title"),
            technique_label: parse_selector_with_fallback(self.technique_label, "technique label"),
            technique_description: parse_selector_with_fallback(
                self.technique_description,
                "technique description",
            ),
        }
    }
}
