use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::Write;
use tracing::info;

use crate::config::Config;
use crate::core::color::parse::parse_hex;
use crate::core::color::semantic::{generate_semantic_palette, GrayScaleName};
use crate::core::color::space::rgb_to_hex;
use crate::core::export::{export_css_variables, export_tailwind_config, PaletteExport};
use crate::error::{Result, ShadeGenError};

#[derive(Args)]
pub struct ExportArgs {
    /// Base color as 6-digit hex (leading # optional)
    color: String,

    /// Gray reference scale (slate, zinc, gray, neutral, stone)
    #[arg(short, long)]
    gray: Option<String>,

    /// CSS variable prefix (defaults to the configured one)
    #[arg(short, long)]
    prefix: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Css)]
    format: ExportFormat,

    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Pretty print JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Css,
    Json,
    Tailwind,
}

pub fn execute(args: ExportArgs, config: &Config) -> Result<()> {
    let base = parse_hex(&args.color).ok_or_else(|| {
        ShadeGenError::Validation(format!("Invalid base color '{}' (use #RRGGBB)", args.color))
    })?;
    let base_hex = rgb_to_hex(base);

    let gray_name = args.gray.as_deref().unwrap_or(&config.gray_scale);
    let gray = GrayScaleName::resolve(gray_name);
    let prefix = args.prefix.as_deref().unwrap_or(&config.variable_prefix);

    let output = match args.format {
        ExportFormat::Css => export_css_variables(&base_hex, gray, prefix),
        ExportFormat::Json => {
            let export = PaletteExport::new(&base_hex, gray, prefix);
            if args.pretty || config.pretty {
                serde_json::to_string_pretty(&export)?
            } else {
                serde_json::to_string(&export)?
            }
        }
        ExportFormat::Tailwind => {
            let palette = generate_semantic_palette(&base_hex, gray);
            export_tailwind_config(&palette)
        }
    };

    if let Some(output_path) = &args.output {
        let mut file = File::create(output_path)?;
        file.write_all(output.as_bytes())?;
        info!("✅ Exported design system for {} to {}", base_hex, output_path);
    } else {
        println!("{}", output);
    }

    Ok(())
}
