use clap::{Args, ValueEnum};

use crate::config::Config;
use crate::core::color::parse::parse_hex;
use crate::core::color::scale::{generate_scale, ScaleStrategy, SCALE_LEVELS};
use crate::core::export::scale_css_block;
use crate::error::{Result, ShadeGenError};

#[derive(Args)]
pub struct ScaleArgs {
    /// Base color as 6-digit hex (leading # optional)
    color: String,

    /// Scale generation strategy (defaults to the configured one)
    #[arg(short, long, value_enum)]
    strategy: Option<ScaleStrategy>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ScaleFormat::Text)]
    format: ScaleFormat,

    /// CSS variable prefix (css format only; defaults to the configured one)
    #[arg(short, long)]
    prefix: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScaleFormat {
    Text,
    Json,
    Css,
}

pub fn execute(args: ScaleArgs, config: &Config) -> Result<()> {
    let base = parse_hex(&args.color).ok_or_else(|| {
        ShadeGenError::Validation(format!("Invalid base color '{}' (use #RRGGBB)", args.color))
    })?;

    let strategy = args.strategy.unwrap_or(config.default_strategy);
    let scale = generate_scale(base, strategy);

    match args.format {
        ScaleFormat::Text => {
            println!("Shade scale ({})", strategy);
            for level in SCALE_LEVELS {
                let marker = if level == 600 { "  <- base" } else { "" };
                println!("  {:>4}  {}{}", level, scale[&level], marker);
            }
        }
        ScaleFormat::Json => {
            let output = if config.pretty {
                serde_json::to_string_pretty(&scale)?
            } else {
                serde_json::to_string(&scale)?
            };
            println!("{}", output);
        }
        ScaleFormat::Css => {
            let prefix = args.prefix.as_deref().unwrap_or(&config.variable_prefix);
            println!("{}", scale_css_block(&scale, prefix));
        }
    }

    Ok(())
}
