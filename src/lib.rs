//! bw_profile library: technology profiles from builtwith.com
//!
//! This library fetches the public technology profile of a domain, extracts the
//! categories and techniques listed on it, and either prints them with colors
//! or stores them as `bw_<domain>.json`. A stored file can be replayed later
//! without network access.
//!
//! # Example
//!
//! ```no_run
//! use bw_profile::{run, Config, OutputMode};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: Some("https://example.com".to_string()),
//!     output: OutputMode::Json,
//!     ..Default::default()
//! };
//!
//! let report = run(&config).await?;
//! println!("{} categories for {}", report.categories, report.domain);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime for the HTTP request.

#![warn(missing_docs)]

pub mod config;
pub mod domain;
pub mod error_handling;
pub mod export;
pub mod fetch;
pub mod initialization;
pub mod models;
pub mod parse;
pub mod present;
mod utils;

// Re-export public API
pub use config::{Cli, Config, LogFormat, LogLevel, OutputMode};
pub use error_handling::BwError;
pub use models::TechnologyProfile;
pub use run::{fetch_profile, run, run_with_output, RunReport};

// Internal run module (contains the pipeline orchestration)
mod run {
    use std::io::{self, Write};
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use log::info;

    use crate::config::{Config, OutputMode};
    use crate::domain::normalize_domain;
    use crate::error_handling::BwError;
    use crate::export::{export_json, load_replay};
    use crate::fetch::fetch_profile_page;
    use crate::initialization::init_client;
    use crate::models::TechnologyProfile;
    use crate::parse::extract_profile;
    use crate::present::{write_colorized, ProfileSet};

    /// Outcome of one invocation.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RunReport {
        /// Normalized domain (fetch) or domain recovered from the file name (replay)
        pub domain: String,
        /// Number of categories rendered or exported
        pub categories: usize,
        /// Number of techniques rendered or exported
        pub techniques: usize,
        /// Exported file, for `OutputMode::Json`
        pub output_file: Option<PathBuf>,
        /// True when the run replayed a stored file instead of fetching
        pub replayed: bool,
    }

    /// Fetches and extracts the profile for an already normalized domain.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the request fails
    /// at the transport level.
    pub async fn fetch_profile(config: &Config, domain: &str) -> Result<TechnologyProfile> {
        let client = init_client(config).context("Failed to initialize HTTP client")?;
        let html = fetch_profile_page(&client, &config.base_url, domain)
            .await
            .with_context(|| format!("Failed to fetch profile for {domain}"))?;
        Ok(extract_profile(&html))
    }

    /// Runs the pipeline, writing user-facing output to stdout.
    ///
    /// # Errors
    ///
    /// See [`run_with_output`].
    pub async fn run(config: &Config) -> Result<RunReport> {
        let mut stdout = io::stdout();
        let report = run_with_output(config, &mut stdout).await?;
        stdout.flush().context("Failed to flush stdout")?;
        Ok(report)
    }

    /// Runs the pipeline, writing user-facing output to `out`.
    ///
    /// With `config.colorize` set, the file is loaded, the domain recovered from
    /// its name is validated, and the profile is rendered; nothing else happens.
    /// Otherwise the URL is normalized, the profile fetched and extracted, then
    /// rendered or exported according to `config.output`.
    ///
    /// # Errors
    ///
    /// Usage problems surface as a [`BwError`] at the root of the returned error
    /// (`MissingUrl`, `InvalidDomain`, `MissingFile`); check them with
    /// `err.downcast_ref::<BwError>()`. Transport, filesystem and JSON failures
    /// are returned with context.
    pub async fn run_with_output<W: Write>(config: &Config, out: &mut W) -> Result<RunReport> {
        if let Some(path) = &config.colorize {
            let replay = load_replay(path)?;
            // The header domain goes through the same validation as --url
            let domain = normalize_domain(&replay.domain)?;
            write_colorized(out, ProfileSet::Sequence(&replay.profiles), &domain)
                .context("Failed to write profile")?;
            return Ok(RunReport {
                categories: replay.profiles.iter().map(|p| p.category_count()).sum(),
                techniques: replay.profiles.iter().map(|p| p.technique_count()).sum(),
                domain,
                output_file: None,
                replayed: true,
            });
        }

        let url = config.url.as_deref().ok_or(BwError::MissingUrl)?;
        let domain = normalize_domain(url)?;
        info!("Fetching technology profile for {}", domain);

        let profile = fetch_profile(config, &domain).await?;
        if profile.is_empty() {
            info!("No technology cards found for {}", domain);
        }

        let output_file = match config.output {
            OutputMode::Stdout => {
                write_colorized(out, ProfileSet::Single(&profile), &domain)
                    .context("Failed to write profile")?;
                None
            }
            OutputMode::Json => {
                let path = export_json(&profile, &domain, &config.output_dir)?;
                writeln!(out, "[i] Results stored in '{}'.", path.display())
                    .context("Failed to write status line")?;
                Some(path)
            }
        };

        Ok(RunReport {
            categories: profile.category_count(),
            techniques: profile.technique_count(),
            domain,
            output_file,
            replayed: false,
        })
    }
}
