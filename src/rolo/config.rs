use crate::error::{Result, RoloError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for rolo, stored in config.json next to the book files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoloConfig {
    /// strftime format for the birthday column (e.g. "%d-%m-%Y")
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_date_format() -> String {
    crate::render::DEFAULT_DATE_FORMAT.to_string()
}

impl Default for RoloConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

impl RoloConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RoloError::Io)?;
        let config: RoloConfig = serde_json::from_str(&content).map_err(RoloError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RoloError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RoloError::Serialization)?;
        fs::write(config_path, content).map_err(RoloError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = RoloConfig::default();
        assert_eq!(config.date_format, "%d-%m-%Y");
    }

    #[test]
    fn load_missing_config_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = RoloConfig::load(dir.path()).unwrap();
        assert_eq!(config, RoloConfig::default());
    }

    #[test]
    fn config_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let config = RoloConfig {
            date_format: "%Y-%m-%d".to_string(),
        };
        config.save(dir.path()).unwrap();

        let loaded = RoloConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }
}
