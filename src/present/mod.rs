//! Terminal output.
//!
//! This module provides:
//! - Colorized rendering of one or more profiles
//! - The startup banner
//!
//! Every renderer writes to a `std::io::Write` so output can be captured.

mod banner;
mod colorize;

// Re-export public API
pub use banner::{print_banner, write_banner};
pub use colorize::{write_colorized, ProfileSet};
