//! Shade scale generation.
//!
//! Derives the 11-level (50-950) shade scale from a single base color. The
//! base always sits at level 600; lower levels mix toward white, higher
//! levels toward black. Two strategies exist: the mixed (white/black
//! interpolation) strategy drives the semantic palette and every export
//! path, while the HSL remap strategy is kept as a supported alternative.

use std::collections::BTreeMap;
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::space::{hsl_to_rgb, hsv_to_hsl, rgb_to_hex, rgb_to_hsv, Hsl, Rgb};

/// The fixed, ordered set of scale levels.
pub const SCALE_LEVELS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Level of the base color itself.
pub const BASE_LEVEL: u16 = 600;

/// A level -> hex mapping covering all of [`SCALE_LEVELS`].
pub type ColorScale = BTreeMap<u16, String>;

/// Which algorithm derives the shade scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleStrategy {
    /// Linear interpolation toward white (below 600) and black (above 600).
    #[default]
    Mixed,
    /// Per-level lightness targets and saturation caps in HSL space.
    Hsl,
}

impl fmt::Display for ScaleStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleStrategy::Mixed => write!(f, "mixed"),
            ScaleStrategy::Hsl => write!(f, "hsl"),
        }
    }
}

impl std::str::FromStr for ScaleStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().trim() {
            "mixed" => Ok(ScaleStrategy::Mixed),
            "hsl" => Ok(ScaleStrategy::Hsl),
            other => Err(format!("unknown scale strategy '{}', expected 'mixed' or 'hsl'", other)),
        }
    }
}

/// Generate a scale with the given strategy.
pub fn generate_scale(base: Rgb, strategy: ScaleStrategy) -> ColorScale {
    match strategy {
        ScaleStrategy::Mixed => generate_mixed_scale(base),
        ScaleStrategy::Hsl => generate_hsl_scale(base),
    }
}

/// Mix ratio toward white for levels below 600.
fn tint_ratio(level: u16) -> f64 {
    match level {
        50 => 0.93,
        100 => 0.85,
        200 => 0.70,
        300 => 0.55,
        400 => 0.35,
        500 => 0.15,
        _ => 0.0,
    }
}

/// Mix ratio toward black for levels above 600.
fn shade_ratio(level: u16) -> f64 {
    match level {
        700 => 0.15,
        800 => 0.30,
        900 => 0.45,
        950 => 0.60,
        _ => 0.0,
    }
}

fn mix_toward_white(channel: u8, ratio: f64) -> u8 {
    (channel as f64 + (255.0 - channel as f64) * ratio).round() as u8
}

fn mix_toward_black(channel: u8, ratio: f64) -> u8 {
    (channel as f64 * (1.0 - ratio)).round() as u8
}

/// Generate the shade scale by white/black linear interpolation.
///
/// Level 600 is the untouched base color. Degenerate bases (pure black or
/// white) still produce a valid monotonic scale, the shades just bunch up
/// at the extremes.
pub fn generate_mixed_scale(base: Rgb) -> ColorScale {
    let mut scale = ColorScale::new();

    for &level in &SCALE_LEVELS {
        let rgb = if level < BASE_LEVEL {
            let ratio = tint_ratio(level);
            Rgb {
                r: mix_toward_white(base.r, ratio),
                g: mix_toward_white(base.g, ratio),
                b: mix_toward_white(base.b, ratio),
            }
        } else if level == BASE_LEVEL {
            base
        } else {
            let ratio = shade_ratio(level);
            Rgb {
                r: mix_toward_black(base.r, ratio),
                g: mix_toward_black(base.g, ratio),
                b: mix_toward_black(base.b, ratio),
            }
        };

        scale.insert(level, rgb_to_hex(rgb));
    }

    scale
}

/// Generate the shade scale by remapping lightness and saturation in HSL
/// space. Level 600 reproduces the base HSL; light levels clamp saturation
/// down so near-white shades stay washed out, dark levels push it up so the
/// hue survives the drop in lightness.
pub fn generate_hsl_scale(base: Rgb) -> ColorScale {
    let base_hsv = rgb_to_hsv(base);
    let base_hsl = hsv_to_hsl(base_hsv);

    let mut scale = ColorScale::new();

    for &level in &SCALE_LEVELS {
        let (lightness, saturation) = match level {
            50 => (96.0, base_hsl.s.min(30.0)),
            100 => (90.0, base_hsl.s.min(40.0)),
            200 => (81.0, base_hsl.s.min(55.0)),
            300 => (72.0, base_hsl.s.min(70.0)),
            400 => ((base_hsl.l * 1.25).min(68.0), base_hsl.s.min(85.0)),
            500 => ((base_hsl.l * 1.12).min(62.0), (base_hsl.s * 0.98).min(95.0)),
            600 => (base_hsl.l, base_hsl.s),
            700 => (
                (base_hsl.l * 0.75).min((base_hsl.l - 15.0).max(8.0)),
                (base_hsl.s * 1.08).min(95.0),
            ),
            800 => (
                (base_hsl.l * 0.70).min((base_hsl.l - 15.0).max(6.0)),
                (base_hsl.s * 1.15).min(95.0),
            ),
            900 => (
                (base_hsl.l * 0.55).min((base_hsl.l - 20.0).max(4.0)),
                (base_hsl.s * 1.2).min(95.0),
            ),
            _ => (
                (base_hsl.l * 0.40).min((base_hsl.l - 25.0).max(2.0)),
                (base_hsl.s * 1.25).min(95.0),
            ),
        };

        let rgb = hsl_to_rgb(Hsl {
            h: base_hsl.h,
            s: saturation,
            l: lightness,
        });
        scale.insert(level, rgb_to_hex(rgb));
    }

    scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::space::hex_to_rgb;

    #[test]
    fn test_mixed_scale_base_level_is_exact() {
        for hex in ["#4f39f6", "#ff5733", "#000000", "#ffffff", "#6b7280"] {
            let rgb = hex_to_rgb(hex);
            let scale = generate_mixed_scale(rgb);
            assert_eq!(scale[&600], rgb_to_hex(rgb));
        }
    }

    #[test]
    fn test_mixed_scale_covers_all_levels() {
        let scale = generate_mixed_scale(hex_to_rgb("#4f39f6"));
        assert_eq!(scale.len(), SCALE_LEVELS.len());
        for level in SCALE_LEVELS {
            assert!(scale.contains_key(&level));
        }
    }

    #[test]
    fn test_mixed_scale_known_ratios() {
        // Level 50 of black: 0 + 255 * 0.93 = 237.15, rounds to 237.
        let scale = generate_mixed_scale(Rgb::BLACK);
        assert_eq!(scale[&50], "#ededed");
        // Level 950 of white: 255 * 0.4 = 102.
        let scale = generate_mixed_scale(Rgb::WHITE);
        assert_eq!(scale[&950], "#666666");
    }

    #[test]
    fn test_mixed_scale_monotonic_per_channel() {
        let base = hex_to_rgb("#4f39f6");
        let scale = generate_mixed_scale(base);
        let channels: Vec<Rgb> = SCALE_LEVELS.iter().map(|l| hex_to_rgb(&scale[l])).collect();

        for pair in channels.windows(2) {
            assert!(pair[0].r >= pair[1].r, "red not monotonic: {:?}", pair);
            assert!(pair[0].g >= pair[1].g, "green not monotonic: {:?}", pair);
            assert!(pair[0].b >= pair[1].b, "blue not monotonic: {:?}", pair);
        }
    }

    #[test]
    fn test_mixed_scale_black_and_white_edges() {
        // Ratios still apply arithmetically even when the base is degenerate.
        let black = generate_mixed_scale(Rgb::BLACK);
        assert_eq!(black[&600], "#000000");
        assert_eq!(black[&950], "#000000");

        let white = generate_mixed_scale(Rgb::WHITE);
        assert_eq!(white[&600], "#ffffff");
        assert_eq!(white[&50], "#ffffff");
    }

    #[test]
    fn test_hsl_scale_base_level_reproduces_base_hsl() {
        let base = hex_to_rgb("#4f39f6");
        let base_hsl = hsv_to_hsl(rgb_to_hsv(base));
        let scale = generate_hsl_scale(base);
        assert_eq!(scale[&600], rgb_to_hex(hsl_to_rgb(base_hsl)));
    }

    #[test]
    fn test_hsl_scale_light_levels_have_fixed_lightness() {
        let scale = generate_hsl_scale(hex_to_rgb("#4f39f6"));
        let l50 = crate::core::color::space::rgb_to_hsl(hex_to_rgb(&scale[&50]));
        assert!((l50.l - 96.0).abs() <= 1.0);
        assert!(l50.s <= 31.0);
    }

    #[test]
    fn test_hsl_scale_achromatic_base() {
        // Saturation 0 stays 0 everywhere; hue is reported as 0 throughout.
        let scale = generate_hsl_scale(Rgb::new(128, 128, 128));
        for level in SCALE_LEVELS {
            let hsl = crate::core::color::space::rgb_to_hsl(hex_to_rgb(&scale[&level]));
            assert_eq!(hsl.s, 0.0, "level {} picked up saturation", level);
        }
    }

    #[test]
    fn test_strategy_dispatch_and_parse() {
        let base = hex_to_rgb("#4f39f6");
        assert_eq!(
            generate_scale(base, ScaleStrategy::Mixed),
            generate_mixed_scale(base)
        );
        assert_eq!(
            generate_scale(base, ScaleStrategy::Hsl),
            generate_hsl_scale(base)
        );
        assert_eq!("mixed".parse::<ScaleStrategy>(), Ok(ScaleStrategy::Mixed));
        assert_eq!("HSL".parse::<ScaleStrategy>(), Ok(ScaleStrategy::Hsl));
        assert!("linear".parse::<ScaleStrategy>().is_err());
    }
}
