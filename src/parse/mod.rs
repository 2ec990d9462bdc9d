//! HTML parsing and profile extraction.
//!
//! This module turns the profile page into a [`TechnologyProfile`]:
//! - Every element matching the card selector is one category
//! - The card title text is the category key
//! - Technique labels and descriptions are paired positionally
//!
//! All parsing is done using CSS selectors via the `scraper` crate.
//!
//! [`TechnologyProfile`]: crate::models::TechnologyProfile

mod profile;

// Re-export public API
pub use profile::{extract_profile, extract_profile_with};
