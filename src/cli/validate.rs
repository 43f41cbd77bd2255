use clap::Args;

use crate::config::Config;
use crate::core::color::editor::ColorValues;
use crate::core::color::parse::{detect_format, parse_color, ColorFormat};
use crate::error::{Result, ShadeGenError};

#[derive(Args)]
pub struct ValidateArgs {
    /// Color text to validate
    value: String,

    /// Expected format (detected from the text when omitted)
    #[arg(short, long, value_enum)]
    format: Option<ColorFormat>,
}

pub fn execute(args: ValidateArgs, _config: &Config) -> Result<()> {
    let input = args.value.trim();
    let format = args.format.unwrap_or_else(|| detect_format(input));

    match parse_color(format, input) {
        Some(rgb) => {
            let values = ColorValues::from_rgb(rgb);
            println!("✅ Valid {}: {} -> {}", format, input, values.hex);
            Ok(())
        }
        None => Err(ShadeGenError::Validation(format.error_hint().to_string())),
    }
}
