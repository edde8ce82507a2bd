//! availcal configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DAY_RANGE;
use crate::day_range::DayRange;
use crate::error::{AvailCalError, AvailCalResult};

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("availcal"))
        .unwrap_or_else(|| PathBuf::from("~/.local/share/availcal"))
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

fn default_day_range() -> i64 {
    DEFAULT_DAY_RANGE
}

fn is_default_day_range(n: &i64) -> bool {
    *n == DEFAULT_DAY_RANGE
}

/// Configuration at ~/.config/availcal/config.toml
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AvailCalConfig {
    /// Where selected dates are stored.
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,

    /// Days shown until a range has been picked.
    #[serde(default = "default_day_range", skip_serializing_if = "is_default_day_range")]
    pub default_day_range: i64,
}

impl Default for AvailCalConfig {
    fn default() -> Self {
        AvailCalConfig {
            data_dir: default_data_dir(),
            default_day_range: DEFAULT_DAY_RANGE,
        }
    }
}

impl AvailCalConfig {
    pub fn config_path() -> AvailCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AvailCalError::Config("Could not determine config directory".into()))?
            .join("availcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default config path. A missing file yields defaults.
    pub fn load() -> AvailCalResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> AvailCalResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| AvailCalError::Config(e.to_string()))
    }

    /// `data_dir` with a leading `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    pub fn default_range(&self) -> DayRange {
        DayRange::clamped(self.default_day_range)
    }

    pub fn save_to(&self, path: &Path) -> AvailCalResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| AvailCalError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AvailCalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| AvailCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a config file with all options commented out.
    pub fn create_default_config(path: &Path) -> AvailCalResult<()> {
        let contents = format!(
            "\
# availcal configuration

# Where selected dates are stored:
# data_dir = \"{}\"

# Days shown until a range is chosen (1-90):
# default_day_range = {}
",
            default_data_dir().display(),
            DEFAULT_DAY_RANGE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AvailCalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| AvailCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
