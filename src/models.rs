//! Technology profile data model.
//!
//! A profile is a two-level ordered mapping: category title (a "card" on the
//! profile page) to technique name to technique description. Order is the
//! order the cards and techniques appear in the page. Re-inserting an existing
//! key replaces its value but keeps its original position.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::PROFILE_KEY;

/// Technique name to description, in page order.
pub type Techniques = IndexMap<String, String>;

/// Category title to its techniques, in page order.
pub type Categories = IndexMap<String, Techniques>;

/// Everything extracted for one domain.
///
/// Serializes as `{"Technology Profile": {<category>: {<technique>: <description>}}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnologyProfile {
    /// Categories keyed by card title
    #[serde(rename = "Technology Profile")]
    pub categories: Categories,
}

impl TechnologyProfile {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the profile source, as printed in headers and used as the JSON key.
    pub fn source(&self) -> &'static str {
        PROFILE_KEY
    }

    /// Inserts a category, replacing any earlier category with the same title.
    pub fn insert_category(&mut self, title: impl Into<String>, techniques: Techniques) {
        self.categories.insert(title.into(), techniques);
    }

    /// True when no categories were found.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of categories.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Number of techniques across all categories.
    pub fn technique_count(&self) -> usize {
        self.categories.values().map(IndexMap::len).sum()
    }
}
