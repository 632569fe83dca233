//! Report options, loadable from a TOML file.

use crate::errors::CaremapError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_max_alerts() -> usize {
    5
}

/// Knobs for the practice report's alert feed.
///
/// The scoring weights and tier cutoffs themselves are business rules, not
/// configuration; they live in [`crate::engine::thresholds`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Maximum number of Moderate/High records surfaced as alerts.
    #[serde(default = "default_max_alerts")]
    pub max_alerts: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            max_alerts: default_max_alerts(),
        }
    }
}

impl ReportOptions {
    pub fn from_toml_file(path: &Path) -> Result<Self, CaremapError> {
        let contents = fs::read_to_string(path).map_err(|source| CaremapError::OptionsRead {
            path: path.to_path_buf(),
            source,
        })?;
        let options: ReportOptions =
            toml::from_str(&contents).map_err(|source| CaremapError::OptionsParse {
                path: path.to_path_buf(),
                source,
            })?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), CaremapError> {
        if self.max_alerts == 0 {
            return Err(CaremapError::InvalidOptions(
                "max_alerts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
