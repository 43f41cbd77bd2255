//! Validation and parsing of textual color formats.
//!
//! Each parser returns `Option<Rgb>`: `None` for malformed or out-of-range
//! input, never a panic. Callers treat `None` as "keep the previous valid
//! value"; invalid text must not reach the picker state of record.

use std::fmt;
use std::sync::LazyLock;

use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::space::{hex_to_rgb, hsl_to_rgb, Hsl, Rgb};

/// `rgb(r, g, b)` with flexible whitespace. Digit-only component patterns
/// reject signs naturally, so negative numbers never match.
static RGB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^rgb\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*\)$").expect("valid rgb pattern"));

/// `hsl(h, s%, l%)` with flexible whitespace.
static HSL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^hsl\(\s*(\d+)\s*,\s*(\d+)%\s*,\s*(\d+)%\s*\)$").expect("valid hsl pattern"));

/// The closed set of textual color formats the tool understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    Hex,
    Rgb,
    Hsl,
}

impl ColorFormat {
    /// User-facing hint shown when text fails to validate for this format.
    pub fn error_hint(self) -> &'static str {
        match self {
            ColorFormat::Hex => "Invalid HEX format (use #RRGGBB)",
            ColorFormat::Rgb => "Invalid RGB format (use rgb(r, g, b))",
            ColorFormat::Hsl => "Invalid HSL format (use hsl(h, s%, l%))",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorFormat::Hex => write!(f, "hex"),
            ColorFormat::Rgb => write!(f, "rgb"),
            ColorFormat::Hsl => write!(f, "hsl"),
        }
    }
}

/// Parse a hex color string. Strips one leading `#`; the remainder must be
/// exactly 6 hex digits.
pub fn parse_hex(input: &str) -> Option<Rgb> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Some(hex_to_rgb(digits))
}

/// Parse an `rgb(r, g, b)` string. Each component must be an unsigned
/// integer no greater than 255.
pub fn parse_rgb(input: &str) -> Option<Rgb> {
    let caps = RGB_RE.captures(input)?;
    let r: u32 = caps[1].parse().ok()?;
    let g: u32 = caps[2].parse().ok()?;
    let b: u32 = caps[3].parse().ok()?;
    if r > 255 || g > 255 || b > 255 {
        return None;
    }
    Some(Rgb::new(r as u8, g as u8, b as u8))
}

/// Parse an `hsl(h, s%, l%)` string with h <= 360 and s, l <= 100, then
/// convert to RGB.
pub fn parse_hsl(input: &str) -> Option<Rgb> {
    let caps = HSL_RE.captures(input)?;
    let h: u32 = caps[1].parse().ok()?;
    let s: u32 = caps[2].parse().ok()?;
    let l: u32 = caps[3].parse().ok()?;
    if h > 360 || s > 100 || l > 100 {
        return None;
    }
    Some(hsl_to_rgb(Hsl {
        h: h as f64,
        s: s as f64,
        l: l as f64,
    }))
}

/// Parse text as the given format.
pub fn parse_color(format: ColorFormat, input: &str) -> Option<Rgb> {
    match format {
        ColorFormat::Hex => parse_hex(input),
        ColorFormat::Rgb => parse_rgb(input),
        ColorFormat::Hsl => parse_hsl(input),
    }
}

/// True when the text is valid for the given format right now. Used for
/// live-edit validation before anything is committed.
pub fn validate_color(format: ColorFormat, input: &str) -> bool {
    parse_color(format, input).is_some()
}

/// Guess the format from the text's leading token. A bare string is assumed
/// to be hex; actual validity is decided by the parser.
pub fn detect_format(input: &str) -> ColorFormat {
    if input.starts_with("rgb(") {
        ColorFormat::Rgb
    } else if input.starts_with("hsl(") {
        ColorFormat::Hsl
    } else {
        ColorFormat::Hex
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#FF5733"), Some(Rgb::new(255, 87, 51)));
        assert_eq!(parse_hex("ff5733"), Some(Rgb::new(255, 87, 51)));
        assert_eq!(parse_hex("zz5733"), None);
        assert_eq!(parse_hex("#ff573"), None);
        assert_eq!(parse_hex("#ff57333"), None);
        assert_eq!(parse_hex(""), None);
    }

    #[test]
    fn test_parse_rgb() {
        assert_eq!(parse_rgb("rgb(255, 87, 51)"), Some(Rgb::new(255, 87, 51)));
        assert_eq!(parse_rgb("rgb(0,0,0)"), Some(Rgb::BLACK));
        assert_eq!(parse_rgb("rgb( 12 , 34 , 56 )"), Some(Rgb::new(12, 34, 56)));
    }

    #[test]
    fn test_parse_rgb_rejects_out_of_range() {
        assert_eq!(parse_rgb("rgb(256, 0, 0)"), None);
        assert_eq!(parse_rgb("rgb(0, 999, 0)"), None);
        // The digit-only pattern never matches a sign.
        assert_eq!(parse_rgb("rgb(-1, 0, 0)"), None);
    }

    #[test]
    fn test_parse_rgb_rejects_malformed() {
        assert_eq!(parse_rgb("rgb(255, 87)"), None);
        assert_eq!(parse_rgb("rgba(255, 87, 51, 1)"), None);
        assert_eq!(parse_rgb("255, 87, 51"), None);
        assert_eq!(parse_rgb("rgb(a, b, c)"), None);
    }

    #[test]
    fn test_parse_hsl() {
        let rgb = parse_hsl("hsl(11, 100%, 60%)").unwrap();
        assert!((rgb.r as i16 - 255).abs() <= 1);
        assert!((rgb.g as i16 - 87).abs() <= 1);
        assert!((rgb.b as i16 - 51).abs() <= 1);

        assert_eq!(parse_hsl("hsl(0, 0%, 0%)"), Some(Rgb::BLACK));
        assert_eq!(parse_hsl("hsl(360, 100%, 100%)"), Some(Rgb::WHITE));
    }

    #[test]
    fn test_parse_hsl_rejects_out_of_range() {
        assert_eq!(parse_hsl("hsl(361, 50%, 50%)"), None);
        assert_eq!(parse_hsl("hsl(180, 101%, 50%)"), None);
        assert_eq!(parse_hsl("hsl(180, 50%, 101%)"), None);
    }

    #[test]
    fn test_parse_hsl_rejects_missing_percent() {
        assert_eq!(parse_hsl("hsl(180, 50, 50)"), None);
        assert_eq!(parse_hsl("hsl(180, 50%, 50)"), None);
    }

    #[test]
    fn test_parse_color_dispatch() {
        assert_eq!(
            parse_color(ColorFormat::Hex, "#4f39f6"),
            Some(Rgb::new(79, 57, 246))
        );
        assert_eq!(
            parse_color(ColorFormat::Rgb, "rgb(79, 57, 246)"),
            Some(Rgb::new(79, 57, 246))
        );
        assert_eq!(parse_color(ColorFormat::Hsl, "#4f39f6"), None);
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(detect_format("rgb(1, 2, 3)"), ColorFormat::Rgb);
        assert_eq!(detect_format("hsl(1, 2%, 3%)"), ColorFormat::Hsl);
        assert_eq!(detect_format("#4f39f6"), ColorFormat::Hex);
        assert_eq!(detect_format("4f39f6"), ColorFormat::Hex);
    }

    #[test]
    fn test_validate_color() {
        assert!(validate_color(ColorFormat::Hex, "#4f39f6"));
        assert!(!validate_color(ColorFormat::Hex, "#4f39f"));
        assert!(validate_color(ColorFormat::Rgb, "rgb(1, 2, 3)"));
        assert!(!validate_color(ColorFormat::Rgb, "rgb(1, 2, 300)"));
    }
}
