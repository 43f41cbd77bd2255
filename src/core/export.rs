//! Design-token export.
//!
//! Turns the derived scales and semantic palette into consumable artifacts:
//! CSS custom properties, a Tailwind color map, and a JSON document. In the
//! CSS output, scale-backed semantic roles are emitted as `var()`
//! indirections into the scale variables rather than duplicated literals,
//! so consumers can re-theme by editing only the base scale. Computed roles
//! (contrast, surface-alt) have no scale slot and stay literal.

use serde::{Deserialize, Serialize};

use super::color::scale::{generate_mixed_scale, ColorScale};
use super::color::semantic::{
    generate_semantic_palette, GrayScaleName, RoleBinding, RoleKey, SemanticPalette,
};
use super::color::space::hex_to_rgb;

/// Fallback variable prefix when the configured one is blank.
pub const DEFAULT_PREFIX: &str = "primary";

/// Normalize a user-supplied variable prefix; blank falls back to
/// [`DEFAULT_PREFIX`].
pub fn sanitize_prefix(prefix: &str) -> &str {
    let trimmed = prefix.trim();
    if trimmed.is_empty() {
        DEFAULT_PREFIX
    } else {
        trimmed
    }
}

fn scale_variable_lines(scale: &ColorScale, prefix: &str) -> String {
    scale
        .iter()
        .map(|(level, hex)| format!("  --{}-{}: {};", prefix, level, hex))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A single scale as a standalone `:root` block.
pub fn scale_css_block(scale: &ColorScale, prefix: &str) -> String {
    let prefix = sanitize_prefix(prefix);
    format!(":root {{\n{}\n}}", scale_variable_lines(scale, prefix))
}

fn semantic_variable_lines(
    palette: &SemanticPalette,
    prefix: &str,
    gray: GrayScaleName,
) -> String {
    RoleKey::ALL
        .iter()
        .map(|&key| {
            let value = match key.binding() {
                RoleBinding::Scale(level) => format!("var(--{}-{})", prefix, level),
                RoleBinding::Gray(level) => format!("var(--{}-{})", gray, level),
                RoleBinding::Computed => palette.role(key).color.clone(),
            };
            format!("  --{}-{}: {};", prefix, key.css_name(), value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The complete design-system CSS: base scale, gray scale and semantic
/// roles in one `:root` block.
pub fn export_css_variables(base_color: &str, gray: GrayScaleName, prefix: &str) -> String {
    let prefix = sanitize_prefix(prefix);

    let base_scale = generate_mixed_scale(hex_to_rgb(base_color));
    let gray_scale = generate_mixed_scale(hex_to_rgb(gray.base_hex()));
    let palette = generate_semantic_palette(base_color, gray);

    let gray_label = {
        let name = gray.to_string();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => name,
        }
    };

    format!(
        ":root {{\n  /* Base Color Scale */\n{}\n\n  /* Gray Scale ({}) */\n{}\n\n  /* Semantic Colors */\n{}\n}}",
        scale_variable_lines(&base_scale, prefix),
        gray_label,
        scale_variable_lines(&gray_scale, &gray.to_string()),
        semantic_variable_lines(&palette, prefix, gray),
    )
}

/// Tailwind color configuration with every semantic role under a `brand`
/// key.
pub fn export_tailwind_config(palette: &SemanticPalette) -> String {
    let mut config = String::new();
    config.push_str("// Tailwind CSS Color Configuration\n");
    config.push_str("module.exports = {\n");
    config.push_str("  theme: {\n");
    config.push_str("    extend: {\n");
    config.push_str("      colors: {\n");
    config.push_str("        brand: {\n");
    for key in RoleKey::ALL {
        config.push_str(&format!(
            "          {}: '{}',\n",
            key.json_name(),
            palette.role(key).color
        ));
    }
    config.push_str("        }\n");
    config.push_str("      }\n");
    config.push_str("    }\n");
    config.push_str("  }\n");
    config.push_str("}\n");
    config
}

/// Header describing an export run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub exported_at: String,
    pub tool: String,
    pub version: String,
    pub base_color: String,
    pub gray_scale: String,
    pub prefix: String,
}

impl ExportMetadata {
    pub fn new(base_color: &str, gray: GrayScaleName, prefix: &str) -> Self {
        ExportMetadata {
            exported_at: chrono::Utc::now().to_rfc3339(),
            tool: "shadegen-cli".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            base_color: base_color.to_string(),
            gray_scale: gray.to_string(),
            prefix: sanitize_prefix(prefix).to_string(),
        }
    }
}

/// Everything one export run derives, serializable as a JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteExport {
    pub metadata: ExportMetadata,
    pub base_scale: ColorScale,
    pub gray_scale: ColorScale,
    pub semantic: SemanticPalette,
}

impl PaletteExport {
    pub fn new(base_color: &str, gray: GrayScaleName, prefix: &str) -> Self {
        PaletteExport {
            metadata: ExportMetadata::new(base_color, gray, prefix),
            base_scale: generate_mixed_scale(hex_to_rgb(base_color)),
            gray_scale: generate_mixed_scale(hex_to_rgb(gray.base_hex())),
            semantic: generate_semantic_palette(base_color, gray),
        }
    }
}
