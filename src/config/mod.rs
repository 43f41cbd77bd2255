use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::core::color::scale::ScaleStrategy;

pub mod validation;

fn default_variable_prefix() -> String {
    "primary".to_string()
}

fn default_gray_scale() -> String {
    "gray".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Prefix for exported CSS custom properties
    #[serde(default = "default_variable_prefix")]
    pub variable_prefix: String,

    /// Neutral gray reference scale (slate, zinc, gray, neutral, stone).
    /// Unrecognized names resolve to "gray" at the point of use.
    #[serde(default = "default_gray_scale")]
    pub gray_scale: String,

    /// Default shade-scale strategy for the scale command
    #[serde(default)]
    pub default_strategy: ScaleStrategy,

    /// Pretty-print JSON output by default
    #[serde(default)]
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variable_prefix: default_variable_prefix(),
            gray_scale: default_gray_scale(),
            default_strategy: ScaleStrategy::Mixed,
            pretty: false,
        }
    }
}

impl Config {
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        // Try to load .env file if it exists (for development setups)
        dotenvy::dotenv().ok();

        // Start with default configuration
        let mut config = Self::default();

        // Override with file configuration if available
        let config_file = if let Some(path) = config_path {
            let path = PathBuf::from(path);
            if !path.exists() {
                return Err(crate::error::ConfigError::FileNotFound { path }.into());
            }
            Some(path)
        } else {
            match Self::default_config_path() {
                Ok(path) => Some(path),
                Err(_) => {
                    warn!("ProjectDirs unavailable; skipping config file lookup");
                    None
                }
            }
        };

        if let Some(config_file) = config_file {
            if config_file.exists() {
                let content = fs::read_to_string(&config_file)?;
                let file_config: Config = toml::from_str(&content)?;
                config = file_config;
            }
        }

        // Override with environment variables (highest priority)
        config.load_from_env();

        Ok(config)
    }

    /// Load configuration from environment variables
    fn load_from_env(&mut self) {
        if let Ok(prefix) = env::var("SHADEGEN_VARIABLE_PREFIX") {
            let trimmed = prefix.trim().to_string();
            if !trimmed.is_empty() {
                self.variable_prefix = trimmed;
            }
        }

        if let Ok(gray) = env::var("SHADEGEN_GRAY_SCALE") {
            let trimmed = gray.trim().to_string();
            if !trimmed.is_empty() {
                self.gray_scale = trimmed;
            }
        }

        if let Ok(strategy) = env::var("SHADEGEN_DEFAULT_STRATEGY") {
            match strategy.parse::<ScaleStrategy>() {
                Ok(value) => self.default_strategy = value,
                Err(reason) => warn!("ignoring SHADEGEN_DEFAULT_STRATEGY: {}", reason),
            }
        }

        if let Ok(pretty) = env::var("SHADEGEN_PRETTY") {
            if let Ok(value) = pretty.parse::<bool>() {
                self.pretty = value;
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn default_config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("dev", "shadegen", "shadegen-cli")
            .ok_or_else(|| anyhow::anyhow!("Failed to determine project directories"))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Self::default_config_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.variable_prefix, "primary");
        assert_eq!(config.gray_scale, "gray");
        assert_eq!(config.default_strategy, ScaleStrategy::Mixed);
        assert!(!config.pretty);
    }

    #[test]
    fn test_config_from_partial_toml() {
        let config: Config = toml::from_str("variable_prefix = \"brand\"").unwrap();
        assert_eq!(config.variable_prefix, "brand");
        // Unspecified fields take their defaults.
        assert_eq!(config.gray_scale, "gray");
        assert_eq!(config.default_strategy, ScaleStrategy::Mixed);
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = Config::default();
        config.variable_prefix = "accent".to_string();
        config.gray_scale = "slate".to_string();
        config.default_strategy = ScaleStrategy::Hsl;
        config.pretty = true;

        let content = toml::to_string_pretty(&config).unwrap();
        let loaded: Config = toml::from_str(&content).unwrap();
        assert_eq!(loaded.variable_prefix, "accent");
        assert_eq!(loaded.gray_scale, "slate");
        assert_eq!(loaded.default_strategy, ScaleStrategy::Hsl);
        assert!(loaded.pretty);
    }
}
