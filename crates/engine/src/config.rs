use crate::error::ConfigError;
use crate::options::Rounding;
use derive_builder::Builder;
use std::path::{Path, PathBuf};

/// Environment variable holding the target application ID.
pub const APP_ID_ENV: &str = "APP_ID";
/// Environment variable holding the roster CSV path.
pub const CSV_FILE_ENV: &str = "CSV_FILE";

const CSV_EXTENSION: &str = "csv";

/// Unvalidated run settings, as collected from the command line or environment.
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into), default)]
pub struct Config {
    #[builder(setter(into, strip_option))]
    pub app_id: Option<String>,
    #[builder(setter(into, strip_option))]
    pub csv_file: Option<PathBuf>,
    pub rounding: Rounding,
    /// Treat the first row as a header instead of data.
    pub has_headers: bool,
}

/// Settings that passed [`Config::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    pub app_id: String,
    pub csv_file: PathBuf,
    pub rounding: Rounding,
    pub has_headers: bool,
}

impl Config {
    /// Check the settings in a fixed order; the first failing check wins.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] of the first check that fails.
    pub fn validate(&self) -> Result<ValidatedConfig, ConfigError> {
        let app_id = self
            .app_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(ConfigError::MissingAppId)?;

        let csv_file = self
            .csv_file
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(ConfigError::MissingCsvFile)?;

        if !has_csv_extension(csv_file) {
            return Err(ConfigError::NotCsv);
        }

        if !csv_file.exists() {
            return Err(ConfigError::FileNotFound);
        }

        Ok(ValidatedConfig {
            app_id: app_id.to_string(),
            csv_file: csv_file.to_path_buf(),
            rounding: self.rounding,
            has_headers: self.has_headers,
        })
    }
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == CSV_EXTENSION)
}
