// crates/engine/src/lib.rs
pub mod calculator;
pub mod config;
pub mod error;
pub mod options;
pub mod parser;
pub mod source;
pub mod stats;

use crate::config::Config;
use crate::error::Result;
use crate::stats::LicenseReport;

/// Validate `config`, read the roster and compute the license report.
///
/// # Errors
///
/// Returns [`error::EngineError::Config`] when validation fails, and a read or
/// decode error when the roster cannot be acquired. Filtered rows never fail.
pub fn run(config: &Config) -> Result<LicenseReport> {
    let config = config.validate()?;
    log::debug!(
        "counting licenses for app {} from {} (rounding {})",
        config.app_id,
        config.csv_file.display(),
        config.rounding
    );

    let tally = source::tally_file(&config.csv_file, config.has_headers, &config.app_id)?;
    log::debug!("{} user(s) in tally", tally.len());

    Ok(calculator::license_report(
        &tally,
        &config.app_id,
        config.rounding,
    ))
}
