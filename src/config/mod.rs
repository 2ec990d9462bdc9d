//! Application configuration and constants.
//!
//! This module provides:
//! - Fixed constants (target site, User-Agent, domain pattern, file naming)
//! - The CSS selector set used to read profile cards
//! - CLI option types and the library `Config`

mod constants;
mod selectors;
mod types;

// Re-export all constants
pub use constants::*;
pub(crate) use selectors::CompiledSelectors;
pub use selectors::{ProfileSelectors, DEFAULT_SELECTORS};
pub use types::{Cli, Config, LogFormat, LogLevel, OutputMode};
