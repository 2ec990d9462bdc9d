//! Error type definitions.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors produced by the profile pipeline.
#[derive(Error, Debug)]
pub enum BwError {
    /// Input could not be reduced to a valid domain.
    #[error("[i] URL has unknown format.")]
    InvalidDomain(String),

    /// Neither `--url` nor `--colorize` was given.
    #[error("[!] No URL supplied!")]
    MissingUrl,

    /// Replay file does not exist.
    #[error("[!] Could not find file {}", .0.display())]
    MissingFile(PathBuf),

    /// Request to the profiling site failed at the transport level.
    #[error("HTTP request failed: {0}")]
    Http(#[from] ReqwestError),

    /// Reading or writing a profile file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A profile file could not be (de)serialized.
    #[error("Invalid profile JSON in {}: {source}", path.display())]
    Json {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },
}

impl BwError {
    /// Returns true for errors caused by user input rather than the environment.
    ///
    /// Usage errors are reported without an error chain.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            BwError::InvalidDomain(_) | BwError::MissingUrl | BwError::MissingFile(_)
        )
    }
}
