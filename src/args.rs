// src/args.rs
use std::ffi::OsString;

use clap::{ArgAction, Parser, ValueHint};
use license_count_engine::config::{APP_ID_ENV, CSV_FILE_ENV};

use crate::options::{CliOutputFormat, CliRounding};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "license_count",
    version = crate::VERSION,
    about = "Count the application licenses required by a machine roster",
    long_about = "Reads a roster CSV (machine ID, user ID, application ID, machine type, comment), \
                  keeps the rows for one application, counts each machine once and applies the \
                  license policy: one license per desktop, two laptops per license beyond that."
)]
pub struct Args {
    /// Application ID to count licenses for
    #[arg(long, env = APP_ID_ENV, help_heading = "Input")]
    pub app_id: Option<String>,

    /// Roster CSV file
    // OsString keeps empty values; an empty path is reported by validation
    #[arg(long, env = CSV_FILE_ENV, value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub csv_file: Option<OsString>,

    /// Treat the first row of the CSV as a header
    #[arg(long, help_heading = "Input")]
    pub has_headers: bool,

    /// Tie-breaking rule for an odd number of leftover laptops
    #[arg(long, value_enum, default_value = "half-away", help_heading = "Policy")]
    pub rounding: CliRounding,

    /// Output format
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// Print a per-user breakdown before the total (table format)
    #[arg(long, help_heading = "Output")]
    pub per_user: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet", help_heading = "Logging")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, help_heading = "Logging")]
    pub quiet: bool,
}
