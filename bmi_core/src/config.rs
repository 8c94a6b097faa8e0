//! Configuration file support for the BMI calculator.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/bmi/config.toml`.
//! Nothing else is ever read from or written to disk.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub clock: ClockConfig,
}

/// Order in which history is presented
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HistoryOrder {
    #[default]
    OldestFirst,
    NewestFirst,
}

/// Wall clock used for history timestamps
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Timezone {
    #[default]
    Local,
    Utc,
}

/// History display configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct DisplayConfig {
    #[serde(default)]
    pub history_order: HistoryOrder,
}

/// Timestamp clock configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct ClockConfig {
    #[serde(default)]
    pub timezone: Timezone,
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        Self::load_or_default(&Self::default_config_path())
    }

    /// Load configuration from `path`, falling back to defaults if it is absent
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .unwrap_or_else(|| PathBuf::from(".config"))
        });
        base.join("bmi").join("config.toml")
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.display.history_order, HistoryOrder::OldestFirst);
        assert_eq!(config.clock.timezone, Timezone::Local);
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.display.history_order = HistoryOrder::NewestFirst;
        config.clock.timezone = Timezone::Utc;

        let toml_str = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[display]
history_order = "newest_first"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.history_order, HistoryOrder::NewestFirst);
        assert_eq!(config.clock.timezone, Timezone::Local); // default
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        let toml_str = r#"
[clock]
timezone = "mars"
"#;
        assert!(toml::from_str::<Config>(toml_str).is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.clock.timezone = Timezone::Utc;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.clock.timezone, Timezone::Utc);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[display\nhistory_order = ").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(Error::Toml(_))));
    }
}
