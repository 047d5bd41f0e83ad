// ABOUTME: Application configuration handling.
// ABOUTME: Loads and saves layout and host settings from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::pane::{DEFAULT_MIN_PANE_WIDTH, DEFAULT_PROPORTIONS};

/// Largest drift from 100 tolerated in configured proportions
const PROPORTION_SUM_TOLERANCE: f64 = 1e-6;

/// Pane sizing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Initial pane proportions in percent, left to right
    pub proportions: Vec<f64>,

    /// Minimum pixel width of every pane
    pub min_pane_width: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            proportions: DEFAULT_PROPORTIONS.to_vec(),
            min_pane_width: DEFAULT_MIN_PANE_WIDTH,
        }
    }
}

impl LayoutConfig {
    /// Check that the settings describe a usable partition.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.proportions.len() < 2 {
            return Err(ConfigError::Invalid(format!(
                "layout needs at least 2 panes, got {}",
                self.proportions.len()
            )));
        }
        if let Some(bad) = self
            .proportions
            .iter()
            .find(|p| !p.is_finite() || **p < 0.0)
        {
            return Err(ConfigError::Invalid(format!(
                "pane proportion {bad} is not a non-negative number"
            )));
        }
        let sum: f64 = self.proportions.iter().sum();
        if (sum - 100.0).abs() > PROPORTION_SUM_TOLERANCE {
            return Err(ConfigError::Invalid(format!(
                "pane proportions sum to {sum}, expected 100"
            )));
        }
        if !self.min_pane_width.is_finite() || self.min_pane_width < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "min_pane_width {} is not a non-negative number",
                self.min_pane_width
            )));
        }
        Ok(())
    }
}

/// Settings for the hosting view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSettings {
    /// Container width in pixels (the page grid caps at 1220px)
    pub container_width: f64,

    /// Width of the grab area drawn for each divider
    pub divider_width: f64,
}

impl HostSettings {
    /// Check that the container can be laid out and dividers grabbed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.container_width.is_finite() || self.container_width <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "container_width {} is not a positive number",
                self.container_width
            )));
        }
        if !self.divider_width.is_finite() || self.divider_width < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "divider_width {} is not a non-negative number",
                self.divider_width
            )));
        }
        Ok(())
    }
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            container_width: 1220.0,
            divider_width: 6.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pane sizing
    pub layout: LayoutConfig,

    /// Hosting view
    pub host: HostSettings,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("Could not determine config directory")]
    NoConfigDir,
}

impl Config {
    /// Get the default config file path (~/.config/lotus-bf/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lotus-bf").join("config.toml"))
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.layout.validate()?;
        config.host.validate()?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save config to default path
    pub fn save_to_default(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path().ok_or(ConfigError::NoConfigDir)?;
        self.save(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.layout.validate().is_ok());
        assert_eq!(config.layout.proportions, vec![28.0, 44.0, 28.0]);
        assert_eq!(config.layout.min_pane_width, 240.0);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.layout.proportions = vec![25.0, 50.0, 25.0];
        config.host.container_width = 1600.0;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[host]\ncontainer_width = 900.0\n").unwrap();
        assert_eq!(config.layout, LayoutConfig::default());
        assert_eq!(config.host.container_width, 900.0);
    }

    #[test]
    fn load_rejects_proportions_not_summing_to_hundred() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[layout]\nproportions = [30.0, 30.0, 30.0]\n").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn validate_rejects_bad_layouts() {
        let single = LayoutConfig {
            proportions: vec![100.0],
            ..LayoutConfig::default()
        };
        assert!(single.validate().is_err());

        let negative = LayoutConfig {
            proportions: vec![-10.0, 60.0, 50.0],
            ..LayoutConfig::default()
        };
        assert!(negative.validate().is_err());

        let bad_floor = LayoutConfig {
            min_pane_width: f64::NAN,
            ..LayoutConfig::default()
        };
        assert!(bad_floor.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_host_settings() {
        assert!(HostSettings::default().validate().is_ok());

        for width in [0.0, -100.0, f64::NAN, f64::INFINITY] {
            let host = HostSettings {
                container_width: width,
                ..HostSettings::default()
            };
            assert!(host.validate().is_err(), "accepted width {width}");
        }

        let negative_divider = HostSettings {
            divider_width: -6.0,
            ..HostSettings::default()
        };
        assert!(negative_divider.validate().is_err());
    }

    #[test]
    fn load_rejects_zero_container_width() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[host]\ncontainer_width = 0.0\n").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn unparsable_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "layout = [").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_default_path() {
        if let Some(p) = Config::default_path() {
            assert!(p.ends_with("lotus-bf/config.toml"));
        }
    }
}
