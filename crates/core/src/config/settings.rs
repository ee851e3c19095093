use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{AntConfig, CheckstyleConfig, JavaConfig, MavenConfig};

/// File names looked up, in order, in each directory from the exercise upwards
pub const CONFIG_FILE_NAMES: [&str; 2] = [".exercise-runner.json", "exercise-runner.json"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    #[serde(default)]
    pub java: JavaConfig,
    #[serde(default)]
    pub ant: AntConfig,
    #[serde(default)]
    pub maven: MavenConfig,
    /// Style checking is skipped when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkstyle: Option<CheckstyleConfig>,
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!("Failed to parse config {}: {e}", path.display()))
        })?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Loads the nearest config file above `path`, or the defaults when there is none
    pub fn load_for(path: &Path) -> Result<Self> {
        match Self::find_config_file(path) {
            Some(config_path) => {
                tracing::debug!("Loading config from {}", config_path.display());
                Self::load_from_file(&config_path)
            }
            None => {
                tracing::debug!("No config file found above {}, using defaults", path.display());
                Ok(Self::default())
            }
        }
    }
}
