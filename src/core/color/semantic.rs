//! Semantic palette generation.
//!
//! Maps a base color plus a neutral gray reference onto the fixed set of
//! design-system roles (interactive states, text, borders, surfaces). Role
//! colors index into the mixed shade scale of the base color and of the
//! selected gray; the on-color text role is a WCAG contrast pick between
//! pure white and pure black.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::scale::{generate_mixed_scale, ColorScale};
use super::space::{hex_to_rgb, Rgb};

pub const WHITE_HEX: &str = "#ffffff";
pub const BLACK_HEX: &str = "#000000";

/// The fixed set of neutral gray reference scales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrayScaleName {
    Slate,
    Zinc,
    #[default]
    Gray,
    Neutral,
    Stone,
}

impl GrayScaleName {
    pub const ALL: [GrayScaleName; 5] = [
        GrayScaleName::Slate,
        GrayScaleName::Zinc,
        GrayScaleName::Gray,
        GrayScaleName::Neutral,
        GrayScaleName::Stone,
    ];

    /// Base hex of the gray swatch (its level-600 anchor).
    pub fn base_hex(self) -> &'static str {
        match self {
            GrayScaleName::Slate => "#64748b",
            GrayScaleName::Zinc => "#71717a",
            GrayScaleName::Gray => "#6b7280",
            GrayScaleName::Neutral => "#737373",
            GrayScaleName::Stone => "#78716c",
        }
    }

    /// Resolve a name, falling back to the default gray for anything
    /// unrecognized. Deliberate silent-default policy: a bad name degrades
    /// to a usable palette instead of failing.
    pub fn resolve(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "slate" => GrayScaleName::Slate,
            "zinc" => GrayScaleName::Zinc,
            "gray" => GrayScaleName::Gray,
            "neutral" => GrayScaleName::Neutral,
            "stone" => GrayScaleName::Stone,
            other => {
                warn!("unrecognized gray scale '{}'; falling back to gray", other);
                GrayScaleName::Gray
            }
        }
    }
}

impl fmt::Display for GrayScaleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrayScaleName::Slate => write!(f, "slate"),
            GrayScaleName::Zinc => write!(f, "zinc"),
            GrayScaleName::Gray => write!(f, "gray"),
            GrayScaleName::Neutral => write!(f, "neutral"),
            GrayScaleName::Stone => write!(f, "stone"),
        }
    }
}

/// WCAG relative luminance of an sRGB color.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    fn linearize(channel: u8) -> f64 {
        let c = channel as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

/// WCAG contrast ratio between two colors, always >= 1.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Pick whichever of pure white or pure black reads better on the base.
pub fn best_contrast(base: Rgb) -> &'static str {
    let white = contrast_ratio(base, Rgb::WHITE);
    let black = contrast_ratio(base, Rgb::BLACK);
    if white > black {
        WHITE_HEX
    } else {
        BLACK_HEX
    }
}

/// The closed set of semantic role identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoleKey {
    Main,
    Hover,
    Active,
    Disabled,
    Contrast,
    TextPrimary,
    TextSecondary,
    Light,
    Lighter,
    Dark,
    Darker,
    Border,
    Surface,
    SurfaceAlt,
}

/// Where a role's color comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleBinding {
    /// A level of the base color's mixed scale.
    Scale(u16),
    /// A level of the gray reference scale.
    Gray(u16),
    /// Computed outside the scales (contrast pick, literal white).
    Computed,
}

impl RoleKey {
    pub const ALL: [RoleKey; 14] = [
        RoleKey::Main,
        RoleKey::Hover,
        RoleKey::Active,
        RoleKey::Disabled,
        RoleKey::Contrast,
        RoleKey::TextPrimary,
        RoleKey::TextSecondary,
        RoleKey::Light,
        RoleKey::Lighter,
        RoleKey::Dark,
        RoleKey::Darker,
        RoleKey::Border,
        RoleKey::Surface,
        RoleKey::SurfaceAlt,
    ];

    /// Scale binding for this role.
    pub fn binding(self) -> RoleBinding {
        match self {
            RoleKey::Main => RoleBinding::Scale(600),
            RoleKey::Hover => RoleBinding::Scale(500),
            RoleKey::Active => RoleBinding::Scale(700),
            RoleKey::Disabled => RoleBinding::Scale(300),
            RoleKey::Light => RoleBinding::Scale(100),
            RoleKey::Lighter => RoleBinding::Scale(50),
            RoleKey::Dark => RoleBinding::Scale(800),
            RoleKey::Darker => RoleBinding::Scale(900),
            RoleKey::TextPrimary => RoleBinding::Gray(950),
            RoleKey::TextSecondary => RoleBinding::Gray(600),
            RoleKey::Border => RoleBinding::Gray(200),
            RoleKey::Surface => RoleBinding::Gray(50),
            RoleKey::Contrast | RoleKey::SurfaceAlt => RoleBinding::Computed,
        }
    }

    /// Kebab-case name used for CSS custom properties.
    pub fn css_name(self) -> &'static str {
        match self {
            RoleKey::Main => "main",
            RoleKey::Hover => "hover",
            RoleKey::Active => "active",
            RoleKey::Disabled => "disabled",
            RoleKey::Contrast => "contrast",
            RoleKey::TextPrimary => "text-primary",
            RoleKey::TextSecondary => "text-secondary",
            RoleKey::Light => "light",
            RoleKey::Lighter => "lighter",
            RoleKey::Dark => "dark",
            RoleKey::Darker => "darker",
            RoleKey::Border => "border",
            RoleKey::Surface => "surface",
            RoleKey::SurfaceAlt => "surface-alt",
        }
    }

    /// camelCase name used for JSON/Tailwind keys.
    pub fn json_name(self) -> &'static str {
        match self {
            RoleKey::Main => "main",
            RoleKey::Hover => "hover",
            RoleKey::Active => "active",
            RoleKey::Disabled => "disabled",
            RoleKey::Contrast => "contrast",
            RoleKey::TextPrimary => "textPrimary",
            RoleKey::TextSecondary => "textSecondary",
            RoleKey::Light => "light",
            RoleKey::Lighter => "lighter",
            RoleKey::Dark => "dark",
            RoleKey::Darker => "darker",
            RoleKey::Border => "border",
            RoleKey::Surface => "surface",
            RoleKey::SurfaceAlt => "surfaceAlt",
        }
    }
}

/// One named design-system token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticRole {
    pub name: String,
    pub description: String,
    pub color: String,
    pub usage: String,
}

/// The full role -> color mapping derived from one base color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticPalette {
    pub base_color: String,
    pub roles: BTreeMap<RoleKey, SemanticRole>,
}

impl SemanticPalette {
    pub fn role(&self, key: RoleKey) -> &SemanticRole {
        // Construction inserts every RoleKey, so the lookup cannot miss.
        &self.roles[&key]
    }
}

fn role(name: &str, description: &str, color: String, usage: &str) -> SemanticRole {
    SemanticRole {
        name: name.to_string(),
        description: description.to_string(),
        color,
        usage: usage.to_string(),
    }
}

/// Generate the complete semantic palette from a base color and a gray
/// reference scale.
///
/// The `main` role carries the caller's base-color string untouched; the
/// scale generator independently reproduces the same value at level 600.
pub fn generate_semantic_palette(base_color: &str, gray: GrayScaleName) -> SemanticPalette {
    let base_rgb = hex_to_rgb(base_color);
    let mixed_scale = generate_mixed_scale(base_rgb);

    let gray_rgb = hex_to_rgb(gray.base_hex());
    let gray_scale = generate_mixed_scale(gray_rgb);

    let mut roles = BTreeMap::new();

    for key in RoleKey::ALL {
        let entry = build_role(key, base_color, base_rgb, &mixed_scale, &gray_scale);
        roles.insert(key, entry);
    }

    SemanticPalette {
        base_color: base_color.to_string(),
        roles,
    }
}

fn build_role(
    key: RoleKey,
    base_color: &str,
    base_rgb: Rgb,
    mixed_scale: &ColorScale,
    gray_scale: &ColorScale,
) -> SemanticRole {
    match key {
        RoleKey::Main => role(
            "Main",
            "Primary brand color (Shade 600)",
            base_color.to_string(),
            "Buttons, links, primary actions",
        ),
        RoleKey::Hover => role(
            "Hover",
            "Interactive hover state (Shade 500)",
            mixed_scale[&500].clone(),
            "Button hover, link hover",
        ),
        RoleKey::Active => role(
            "Active",
            "Active/pressed state (Shade 700)",
            mixed_scale[&700].clone(),
            "Active buttons, pressed states",
        ),
        RoleKey::Disabled => role(
            "Disabled",
            "Disabled state (Shade 300)",
            mixed_scale[&300].clone(),
            "Disabled buttons, inactive elements",
        ),
        RoleKey::Contrast => role(
            "Contrast",
            "High contrast text (White/Black)",
            best_contrast(base_rgb).to_string(),
            "Text on main color background",
        ),
        RoleKey::TextPrimary => role(
            "Text",
            "Primary text color (Gray 950)",
            gray_scale[&950].clone(),
            "Headlines, primary text",
        ),
        RoleKey::TextSecondary => role(
            "Muted",
            "Secondary text color (Gray 600)",
            gray_scale[&600].clone(),
            "Captions, secondary text",
        ),
        RoleKey::Light => role(
            "Light",
            "Light tint (Shade 100)",
            mixed_scale[&100].clone(),
            "Light backgrounds, subtle highlights",
        ),
        RoleKey::Lighter => role(
            "Lighter",
            "Very light tint (Shade 50)",
            mixed_scale[&50].clone(),
            "Very subtle backgrounds",
        ),
        RoleKey::Dark => role(
            "Dark",
            "Dark shade (Shade 800)",
            mixed_scale[&800].clone(),
            "Dark accents, shadows",
        ),
        RoleKey::Darker => role(
            "Darker",
            "Very dark shade (Shade 900)",
            mixed_scale[&900].clone(),
            "Deep shadows, dark themes",
        ),
        RoleKey::Border => role(
            "Border",
            "Border color (Gray 200)",
            gray_scale[&200].clone(),
            "Input borders, dividers",
        ),
        RoleKey::Surface => role(
            "Surface",
            "Primary surface (Gray 50)",
            gray_scale[&50].clone(),
            "Main backgrounds, page background",
        ),
        RoleKey::SurfaceAlt => role(
            "Surface Alt",
            "Secondary surface (White)",
            WHITE_HEX.to_string(),
            "Cards, panels, elevated backgrounds",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::scale::generate_mixed_scale;

    #[test]
    fn test_gray_scale_resolution() {
        assert_eq!(GrayScaleName::resolve("slate"), GrayScaleName::Slate);
        assert_eq!(GrayScaleName::resolve("Zinc"), GrayScaleName::Zinc);
        assert_eq!(GrayScaleName::resolve(" stone "), GrayScaleName::Stone);
        // Unrecognized names fall back to the default gray.
        assert_eq!(GrayScaleName::resolve("nonsense"), GrayScaleName::Gray);
        assert_eq!(GrayScaleName::resolve(""), GrayScaleName::Gray);
    }

    #[test]
    fn test_relative_luminance_extremes() {
        assert!(relative_luminance(Rgb::BLACK).abs() < 1e-9);
        assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_contrast_ratio_white_black() {
        let ratio = contrast_ratio(Rgb::WHITE, Rgb::BLACK);
        assert!((ratio - 21.0).abs() < 0.01);
        // Symmetric regardless of argument order.
        assert_eq!(ratio, contrast_ratio(Rgb::BLACK, Rgb::WHITE));
    }

    #[test]
    fn test_best_contrast_picks() {
        assert_eq!(best_contrast(Rgb::WHITE), BLACK_HEX);
        assert_eq!(best_contrast(Rgb::BLACK), WHITE_HEX);
        // A dark saturated base wants white text.
        assert_eq!(best_contrast(hex_to_rgb("#4f39f6")), WHITE_HEX);
    }

    #[test]
    fn test_palette_main_is_untouched_base() {
        let palette = generate_semantic_palette("#4f39f6", GrayScaleName::Gray);
        assert_eq!(palette.role(RoleKey::Main).color, "#4f39f6");
        assert_eq!(palette.base_color, "#4f39f6");
    }

    #[test]
    fn test_palette_role_levels() {
        let palette = generate_semantic_palette("#4f39f6", GrayScaleName::Gray);
        let mixed = generate_mixed_scale(hex_to_rgb("#4f39f6"));
        let gray = generate_mixed_scale(hex_to_rgb("#6b7280"));

        assert_eq!(palette.role(RoleKey::Hover).color, mixed[&500]);
        assert_eq!(palette.role(RoleKey::Active).color, mixed[&700]);
        assert_eq!(palette.role(RoleKey::Disabled).color, mixed[&300]);
        assert_eq!(palette.role(RoleKey::Light).color, mixed[&100]);
        assert_eq!(palette.role(RoleKey::Lighter).color, mixed[&50]);
        assert_eq!(palette.role(RoleKey::Dark).color, mixed[&800]);
        assert_eq!(palette.role(RoleKey::Darker).color, mixed[&900]);
        assert_eq!(palette.role(RoleKey::TextPrimary).color, gray[&950]);
        assert_eq!(palette.role(RoleKey::TextSecondary).color, gray[&600]);
        assert_eq!(palette.role(RoleKey::Border).color, gray[&200]);
        assert_eq!(palette.role(RoleKey::Surface).color, gray[&50]);
        assert_eq!(palette.role(RoleKey::SurfaceAlt).color, WHITE_HEX);
        assert_eq!(palette.role(RoleKey::Contrast).color, WHITE_HEX);
    }

    #[test]
    fn test_palette_has_all_roles() {
        let palette = generate_semantic_palette("#ff5733", GrayScaleName::Slate);
        assert_eq!(palette.roles.len(), RoleKey::ALL.len());
    }

    #[test]
    fn test_role_bindings_are_consistent_with_palette() {
        let palette = generate_semantic_palette("#ff5733", GrayScaleName::Zinc);
        let mixed = generate_mixed_scale(hex_to_rgb("#ff5733"));
        let gray = generate_mixed_scale(hex_to_rgb(GrayScaleName::Zinc.base_hex()));

        for key in RoleKey::ALL {
            match key.binding() {
                // `main` carries the untouched input string; the scale agrees
                // with it at 600 whenever the input was normalized hex.
                RoleBinding::Scale(level) => {
                    assert_eq!(palette.role(key).color, mixed[&level], "role {:?}", key)
                }
                RoleBinding::Gray(level) => {
                    assert_eq!(palette.role(key).color, gray[&level], "role {:?}", key)
                }
                RoleBinding::Computed => {}
            }
        }
    }
}
