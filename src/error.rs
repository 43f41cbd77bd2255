//! Error handling for the shadegen-cli application
//!
//! Hierarchical error system with typed variants and user-friendly
//! messages. The color engine itself never errors (malformed input is
//! expressed through `Option` sentinels and documented fallback defaults),
//! so everything here belongs to the configuration, export and CLI layers.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShadeGenError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid config format: {0}")]
    InvalidFormat(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Environment variable error: {0}")]
    Environment(#[from] std::env::VarError),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShadeGenError>;

impl From<std::io::Error> for ShadeGenError {
    fn from(err: std::io::Error) -> Self {
        ShadeGenError::Export(ExportError::Io(err))
    }
}

impl From<serde_json::Error> for ShadeGenError {
    fn from(err: serde_json::Error) -> Self {
        ShadeGenError::Export(ExportError::Serialization(err))
    }
}

impl From<toml::de::Error> for ShadeGenError {
    fn from(err: toml::de::Error) -> Self {
        ShadeGenError::Config(ConfigError::InvalidFormat(err))
    }
}
