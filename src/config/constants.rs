//! Configuration constants.
//!
//! Everything here is a process-wide immutable value. Nothing else in the crate
//! should carry its own copy of these literals.

use std::sync::LazyLock;

use regex::Regex;

/// Base URL of the technology-profiling site. The normalized domain is appended
/// directly (`https://builtwith.com/example.com`).
pub const BASE_URL: &str = "https://builtwith.com/";

/// User-Agent sent with the profile request.
///
/// The site serves a stripped page to clients that do not look like a browser,
/// so this mimics a desktop Firefox. Override with the hidden `--user-agent` flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:97.0) Gecko/20100101 Firefox/97.0";

/// Domain validation pattern.
///
/// Optional `label.` groups, a final label of at least two characters starting
/// with an alphanumeric, then a 2-11 letter top-level label. Anchored at both ends.
pub const DOMAIN_PATTERN: &str =
    r"^([a-zA-Z0-9_-]+\.)*[a-zA-Z0-9][a-zA-Z0-9_-]+\.[a-zA-Z]{2,11}$";

/// Compiled [`DOMAIN_PATTERN`].
pub static DOMAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // DOMAIN_PATTERN is a literal covered by tests; failure here is a programming error
    Regex::new(DOMAIN_PATTERN).expect("DOMAIN_PATTERN must be a valid regex")
});

/// Top-level key of every profile, both in memory and in exported JSON.
pub const PROFILE_KEY: &str = "Technology Profile";

/// Prefix of exported profile files (`bw_<domain>.json`).
pub const OUTPUT_FILE_PREFIX: &str = "bw_";

/// Extension of exported profile files.
pub const OUTPUT_FILE_EXTENSION: &str = "json";

/// Indentation used when writing exported JSON (4 spaces).
pub const JSON_INDENT: &[u8] = b"    ";
