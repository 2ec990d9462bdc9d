//! Colorized profile listing.
//!
//! Layout per profile:
//!
//! ```text
//! Fetched information from Technology Profile for example.com
//!
//! >>> Analytics and Tracking
//! Google Analytics
//! Google Analytics offers a host of compelling features...
//! ```
//!
//! The `>>>` marker is bold, category titles bright cyan, technique names
//! bright green, descriptions unstyled.

use std::io::{self, Write};

use colored::Colorize;

use crate::models::TechnologyProfile;

/// Profiles to render: a freshly fetched one, or a sequence loaded from disk.
#[derive(Debug, Clone, Copy)]
pub enum ProfileSet<'a> {
    /// A single profile
    Single(&'a TechnologyProfile),
    /// Several profiles, rendered in order
    Sequence(&'a [TechnologyProfile]),
}

impl<'a> ProfileSet<'a> {
    /// The profiles as a slice, whatever the variant.
    pub fn as_slice(&self) -> &'a [TechnologyProfile] {
        match *self {
            ProfileSet::Single(profile) => std::slice::from_ref(profile),
            ProfileSet::Sequence(profiles) => profiles,
        }
    }
}

impl<'a> From<&'a TechnologyProfile> for ProfileSet<'a> {
    fn from(profile: &'a TechnologyProfile) -> Self {
        ProfileSet::Single(profile)
    }
}

impl<'a> From<&'a [TechnologyProfile]> for ProfileSet<'a> {
    fn from(profiles: &'a [TechnologyProfile]) -> Self {
        ProfileSet::Sequence(profiles)
    }
}

/// Writes every profile in `profiles`, each headed by a line naming the source and `domain`.
pub fn write_colorized<W: Write>(
    out: &mut W,
    profiles: ProfileSet<'_>,
    domain: &str,
) -> io::Result<()> {
    for profile in profiles.as_slice() {
        writeln!(
            out,
            "Fetched information from {} for {}",
            profile.source(),
            domain
        )?;
        for (category, techniques) in &profile.categories {
            writeln!(out, "\n{}{}", ">>> ".bold(), category.bright_cyan())?;
            for (technique, description) in techniques {
                writeln!(out, "{}", technique.bright_green())?;
                writeln!(out, "{}", description)?;
            }
        }
    }
    Ok(())
}
