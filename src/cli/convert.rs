use clap::{Args, ValueEnum};

use crate::config::Config;
use crate::core::color::editor::ColorValues;
use crate::core::color::parse::{detect_format, parse_color};
use crate::error::{Result, ShadeGenError};

#[derive(Args)]
pub struct ConvertArgs {
    /// Color to convert (#rrggbb, rgb(r, g, b) or hsl(h, s%, l%))
    color: String,

    /// Output representation
    #[arg(short, long, value_enum, default_value_t = TargetFormat::All)]
    to: TargetFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TargetFormat {
    Hex,
    Rgb,
    Hsl,
    All,
}

pub fn execute(args: ConvertArgs, _config: &Config) -> Result<()> {
    let input = args.color.trim();
    let format = detect_format(input);

    let rgb = parse_color(format, input)
        .ok_or_else(|| ShadeGenError::Validation(format.error_hint().to_string()))?;

    let values = ColorValues::from_rgb(rgb);
    match args.to {
        TargetFormat::Hex => println!("{}", values.hex),
        TargetFormat::Rgb => println!("{}", values.rgb),
        TargetFormat::Hsl => println!("{}", values.hsl),
        TargetFormat::All => {
            println!("HEX  {}", values.hex);
            println!("RGB  {}", values.rgb);
            println!("HSL  {}", values.hsl);
        }
    }

    Ok(())
}
