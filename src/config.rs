// src/config.rs
use crate::args::Args;
pub use license_count_engine::config::Config;
use std::path::PathBuf;

impl From<Args> for Config {
    /// Absent options stay unset so that validation reports them in order.
    fn from(args: Args) -> Self {
        Self {
            app_id: args.app_id,
            csv_file: args.csv_file.map(PathBuf::from),
            rounding: args.rounding.into(),
            has_headers: args.has_headers,
        }
    }
}
