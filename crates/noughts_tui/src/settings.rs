//! View settings loaded from a TOML file.

use crate::error::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// User-configurable settings for the terminal board.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct ViewSettings {
    /// File the tracing subscriber writes to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Gap between a mark and its cell edge, as a fraction of the cell.
    #[serde(default = "default_padding")]
    padding: f64,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_padding() -> f64 {
    0.1
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            padding: default_padding(),
        }
    }
}

impl ViewSettings {
    /// Loads settings from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())?;
        let settings: Self = toml::from_str(&content)?;
        settings.validate()?;

        info!(padding = settings.padding, "Settings loaded successfully");
        Ok(settings)
    }

    /// Loads settings from `path`, or the defaults when the file is absent.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the log file path.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..0.5).contains(&self.padding) {
            return Err(ConfigError::new(format!(
                "padding must be in [0, 0.5), got {}",
                self.padding
            )));
        }
        Ok(())
    }
}
