use clap::{Args, Subcommand};

use crate::config::validation::ConfigValidator;
use crate::config::Config as AppConfig;
use crate::error::{Result, ShadeGenError};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommands,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Show configuration file path
    Path,

    /// Reset configuration to defaults
    Reset,
}

pub fn execute(args: ConfigArgs, config: &AppConfig) -> Result<()> {
    match args.command {
        ConfigCommands::Show => {
            println!("🔧 Current configuration:");
            println!("  🏷️  variable_prefix: {}", config.variable_prefix);
            println!("  🎨 gray_scale: {}", config.gray_scale);
            println!("  📐 default_strategy: {}", config.default_strategy);
            println!("  📄 pretty: {}", config.pretty);
        }

        ConfigCommands::Set { key, value } => {
            let config_path = AppConfig::config_path().map_err(ShadeGenError::Internal)?;
            let mut new_config = config.clone();

            match key.as_str() {
                "variable_prefix" => {
                    ConfigValidator::validate_prefix(&value)?;
                    new_config.variable_prefix = value.trim().to_string();
                }
                "gray_scale" => {
                    ConfigValidator::validate_gray_scale(&value)?;
                    new_config.gray_scale = value.trim().to_lowercase();
                }
                "default_strategy" => {
                    new_config.default_strategy = value
                        .parse()
                        .map_err(ShadeGenError::Validation)?;
                }
                "pretty" => {
                    new_config.pretty = parse_bool_value(&value)?;
                }
                _ => {
                    return Err(ShadeGenError::Validation(format!(
                        "Unknown configuration key: '{}'. Available: variable_prefix, gray_scale, default_strategy, pretty",
                        key
                    )));
                }
            }

            new_config.save(&config_path).map_err(ShadeGenError::Internal)?;
            println!("✅ Configuration updated: {} = {}", key, value);
        }

        ConfigCommands::Get { key } => {
            let value = match key.as_str() {
                "variable_prefix" => config.variable_prefix.clone(),
                "gray_scale" => config.gray_scale.clone(),
                "default_strategy" => config.default_strategy.to_string(),
                "pretty" => config.pretty.to_string(),
                _ => {
                    return Err(ShadeGenError::Validation(format!(
                        "Unknown configuration key: '{}'. Available: variable_prefix, gray_scale, default_strategy, pretty",
                        key
                    )));
                }
            };

            println!("{}", value);
        }

        ConfigCommands::Path => {
            let config_path = AppConfig::config_path().map_err(ShadeGenError::Internal)?;
            println!("{}", config_path.display());
        }

        ConfigCommands::Reset => {
            let config_path = AppConfig::config_path().map_err(ShadeGenError::Internal)?;
            let default_config = AppConfig::default();
            default_config
                .save(&config_path)
                .map_err(ShadeGenError::Internal)?;
            println!("✅ Configuration reset to defaults");
            println!("📁 Config file: {}", config_path.display());
        }
    }

    Ok(())
}

/// Helper function to parse boolean values with better error messages
fn parse_bool_value(value: &str) -> Result<bool> {
    match value.to_lowercase().trim() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ShadeGenError::Validation(format!(
            "Invalid boolean value: '{}'. Use: true/false, 1/0, yes/no, on/off",
            value
        ))),
    }
}
