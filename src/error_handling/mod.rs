//! Error handling.
//!
//! Errors are split into two groups:
//! - **Usage errors**: bad input from the user (malformed domain, missing
//!   `--url`, missing replay file). The binary reports them with a short
//!   `[!]`/`[i]` line and exits with status 1.
//! - **Faults**: transport, filesystem and JSON failures. These are not
//!   recovered; they propagate to `main` and terminate the run.

mod types;

// Re-export public API
pub use types::{BwError, InitializationError};
