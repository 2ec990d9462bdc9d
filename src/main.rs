//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `bw_profile` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Mapping usage errors to exit status 1
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::process;

use bw_profile::initialization::init_logger_with;
use bw_profile::present::print_banner;
use bw_profile::{run, BwError, Cli, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // clap exits with 2 on usage errors; this tool uses 1
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };
    let config = Config::from(cli);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if config.banner {
        print_banner().context("Failed to print banner")?;
    }

    match run(&config).await {
        Ok(report) => {
            log::debug!(
                "Done: {} categories, {} techniques for {}",
                report.categories,
                report.techniques,
                report.domain
            );
            Ok(())
        }
        Err(e) => {
            match e.downcast_ref::<BwError>() {
                Some(usage) if usage.is_usage() => {
                    println!("{usage}");
                    if matches!(usage, BwError::MissingUrl) {
                        let _ = Cli::command().print_help();
                    }
                }
                _ => eprintln!("bw error: {:#}", e),
            }
            process::exit(1);
        }
    }
}
