// src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

use crate::args::Args;
use crate::config::Config;
use crate::presentation::OutputOptions;

/// Run the command described by `args` and print the result.
///
/// # Errors
///
/// Returns configuration, read, decode and output errors for `main` to report.
pub fn run(args: Args) -> error::Result<u64> {
    let output = OutputOptions {
        format: args.format,
        per_user: args.per_user,
    };
    let config = Config::from(args);
    let report = license_count_engine::run(&config)?;
    presentation::print_report(&report, output)?;
    Ok(report.total_licenses)
}
