//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{BASE_URL, DEFAULT_USER_AGENT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Where a fetched profile goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Colorized listing on standard output
    Stdout,
    /// `bw_<domain>.json` in the output directory
    Json,
}

/// Command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "bw",
    version,
    about = "Fetch basic technology information for a domain from builtwith.com"
)]
pub struct Cli {
    /// URL to fetch information for
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// Output format of your data
    #[arg(short = 'o', long, value_enum, default_value_t = OutputMode::Stdout)]
    pub output: OutputMode,

    /// Colorize already stored results
    #[arg(long, value_name = "FILE")]
    pub colorize: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,

    /// Base URL of the profiling site
    #[arg(long, hide = true, default_value = BASE_URL)]
    pub base_url: String,

    /// HTTP User-Agent header value
    #[arg(long, hide = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without going through clap.
///
/// # Examples
///
/// ```no_run
/// use bw_profile::{Config, OutputMode};
///
/// let config = Config {
///     url: Some("https://example.com/".to_string()),
///     output: OutputMode::Json,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Target domain or URL
    pub url: Option<String>,

    /// Output mode for a fetched profile
    pub output: OutputMode,

    /// Previously exported file to replay; skips fetching entirely
    pub colorize: Option<PathBuf>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Print the banner before running
    pub banner: bool,

    /// Base URL the domain is appended to
    pub base_url: String,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Directory JSON exports are written to
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: None,
            output: OutputMode::Stdout,
            colorize: None,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            banner: true,
            base_url: BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output_dir: PathBuf::new(),
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            url: cli.url,
            output: cli.output,
            colorize: cli.colorize,
            log_level: cli.log_level,
            log_format: cli.log_format,
            banner: !cli.no_banner,
            base_url: cli.base_url,
            user_agent: cli.user_agent,
            ..Default::default()
        }
    }
}
