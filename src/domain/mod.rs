//! Domain normalization.
//!
//! Reduces whatever the user typed (`https://www.example.com/path?x=1`,
//! `example.com/`, `example.com`) to the bare host the profiling site expects.
//!
//! Key functions:
//! - `normalize_domain()` - Strips scheme and path, then validates the host

use log::debug;

use crate::config::DOMAIN_REGEX;
use crate::error_handling::BwError;

/// Scheme separator.
const SCHEME_SEPARATOR: &str = "://";

/// Extracts and validates the domain part of a URL.
///
/// Everything up to and including the first `://` is dropped, then everything
/// from the first `/` on. The remainder must match
/// [`DOMAIN_PATTERN`](crate::config::DOMAIN_PATTERN) in full.
///
/// No lowercasing, `www.` stripping or port handling is done: a port makes the
/// input invalid.
///
/// # Errors
///
/// Returns `BwError::InvalidDomain` carrying the original input if the
/// remainder is not a domain.
pub fn normalize_domain(input: &str) -> Result<String, BwError> {
    let without_scheme = match input.split_once(SCHEME_SEPARATOR) {
        Some((_, rest)) => rest,
        None => input,
    };
    let host = match without_scheme.split_once('/') {
        Some((host, _)) => host,
        None => without_scheme,
    };

    if DOMAIN_REGEX.is_match(host) {
        debug!("Normalized '{}' to domain '{}'", input, host);
        Ok(host.to_string())
    } else {
        debug!("Rejected '{}': '{}' is not a domain", input, host);
        Err(BwError::InvalidDomain(input.to_string()))
    }
}
