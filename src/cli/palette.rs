use clap::{Args, ValueEnum};

use crate::config::Config;
use crate::core::color::parse::parse_hex;
use crate::core::color::semantic::{generate_semantic_palette, GrayScaleName, RoleKey};
use crate::core::color::space::rgb_to_hex;
use crate::error::{Result, ShadeGenError};

#[derive(Args)]
pub struct PaletteArgs {
    /// Base color as 6-digit hex (leading # optional)
    color: String,

    /// Gray reference scale (slate, zinc, gray, neutral, stone); anything
    /// else falls back to gray
    #[arg(short, long)]
    gray: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = PaletteFormat::Text)]
    format: PaletteFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PaletteFormat {
    Text,
    Json,
}

pub fn execute(args: PaletteArgs, config: &Config) -> Result<()> {
    let base = parse_hex(&args.color).ok_or_else(|| {
        ShadeGenError::Validation(format!("Invalid base color '{}' (use #RRGGBB)", args.color))
    })?;
    // Normalize so the palette's base color and the scale's 600 level agree
    // even when the input came in without '#' or in uppercase.
    let base_hex = rgb_to_hex(base);

    let gray_name = args.gray.as_deref().unwrap_or(&config.gray_scale);
    let gray = GrayScaleName::resolve(gray_name);

    let palette = generate_semantic_palette(&base_hex, gray);

    match args.format {
        PaletteFormat::Text => {
            println!("Semantic palette for {} (gray: {})", base_hex, gray);
            println!();
            for key in RoleKey::ALL {
                let role = palette.role(key);
                println!(
                    "  {:<14} {:<9} {}",
                    key.json_name(),
                    role.color,
                    role.usage
                );
            }
        }
        PaletteFormat::Json => {
            let output = if config.pretty {
                serde_json::to_string_pretty(&palette)?
            } else {
                serde_json::to_string(&palette)?
            };
            println!("{}", output);
        }
    }

    Ok(())
}
