//! Text-input state machine for the color editor.
//!
//! HSV is the state of record (it keeps hue stable through achromatic
//! values). The editor tracks the exact text of the field currently being
//! edited so the user's typing is never rewritten under them, while the
//! other formats are re-derived on every valid change. Invalid text stays
//! visible in its field until blur, at which point it reverts to the last
//! valid value for that field; it never reaches the HSV state.

use serde::{Deserialize, Serialize};

use super::parse::{parse_color, ColorFormat};
use super::space::{hex_to_rgb, hsv_to_hsl, hsv_to_rgb, rgb_to_hex, rgb_to_hsv, Hsv, Rgb};

/// Current text of the three format fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorValues {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
}

impl ColorValues {
    /// Render all three canonical strings for a color.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let hsv = rgb_to_hsv(rgb);
        let hsl = hsv_to_hsl(hsv);
        ColorValues {
            hex: rgb_to_hex(rgb),
            rgb: format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b),
            hsl: format!("hsl({}, {}%, {}%)", hsl.h, hsl.s, hsl.l),
        }
    }

    pub fn get(&self, format: ColorFormat) -> &str {
        match format {
            ColorFormat::Hex => &self.hex,
            ColorFormat::Rgb => &self.rgb,
            ColorFormat::Hsl => &self.hsl,
        }
    }

    pub fn set(&mut self, format: ColorFormat, value: impl Into<String>) {
        match format {
            ColorFormat::Hex => self.hex = value.into(),
            ColorFormat::Rgb => self.rgb = value.into(),
            ColorFormat::Hsl => self.hsl = value.into(),
        }
    }
}

/// State machine backing the HEX/RGB/HSL input fields.
#[derive(Debug, Clone)]
pub struct ColorEditor {
    hsv: Hsv,
    active_format: Option<ColorFormat>,
    input_values: ColorValues,
    last_valid_values: ColorValues,
}

impl ColorEditor {
    /// Start from a hex color. Malformed input degrades to black, matching
    /// the converter's fallback.
    pub fn new(initial_hex: &str) -> Self {
        let rgb = hex_to_rgb(initial_hex);
        let values = ColorValues::from_rgb(rgb);
        ColorEditor {
            hsv: rgb_to_hsv(rgb),
            active_format: None,
            input_values: values.clone(),
            last_valid_values: values,
        }
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    pub fn active_format(&self) -> Option<ColorFormat> {
        self.active_format
    }

    /// Field text as currently displayed (may be mid-edit and invalid).
    pub fn input_values(&self) -> &ColorValues {
        &self.input_values
    }

    pub fn last_valid_values(&self) -> &ColorValues {
        &self.last_valid_values
    }

    /// Color currently shown by the visual picker. Derived from the rounded
    /// HSV state, so it may sit within one unit per channel of the last
    /// parsed text input.
    pub fn current_rgb(&self) -> Rgb {
        hsv_to_rgb(self.hsv)
    }

    pub fn current_hex(&self) -> String {
        rgb_to_hex(self.current_rgb())
    }

    /// A keystroke in one of the fields. The typed text is kept verbatim
    /// for that field; when it parses, the color state and the other two
    /// fields follow it. Returns whether the text is currently valid.
    pub fn edit(&mut self, format: ColorFormat, text: &str) -> bool {
        self.active_format = Some(format);
        self.input_values.set(format, text);

        match parse_color(format, text) {
            Some(rgb) => {
                self.hsv = rgb_to_hsv(rgb);
                self.resync(Some(format));
                true
            }
            None => false,
        }
    }

    /// Leaving a field. Invalid text reverts to the last valid value for
    /// that field only; valid text is committed as-is.
    pub fn blur(&mut self, format: ColorFormat) {
        if parse_color(format, self.input_values.get(format)).is_none() {
            let restored = self.last_valid_values.get(format).to_string();
            self.input_values.set(format, restored);
        }
        self.active_format = None;
    }

    /// Visual-picker path (pad or hue slider): replaces components of the
    /// HSV state directly and re-derives all field text.
    pub fn update_hsv(&mut self, h: Option<f64>, s: Option<f64>, v: Option<f64>) {
        self.active_format = None;
        if let Some(h) = h {
            self.hsv.h = h;
        }
        if let Some(s) = s {
            self.hsv.s = s;
        }
        if let Some(v) = v {
            self.hsv.v = v;
        }
        self.resync(None);
    }

    /// Recompute field text from the current color. When `keep` names the
    /// actively edited format and its text still parses, that text is the
    /// precision source and stays verbatim in its own field.
    fn resync(&mut self, keep: Option<ColorFormat>) {
        let kept = keep.and_then(|f| parse_color(f, self.input_values.get(f)).map(|rgb| (f, rgb)));

        let source_rgb = match kept {
            Some((_, rgb)) => rgb,
            None => self.current_rgb(),
        };

        let mut next = ColorValues::from_rgb(source_rgb);
        if let Some((format, _)) = kept {
            next.set(format, self.input_values.get(format).to_string());
        }

        self.input_values = next.clone();
        self.last_valid_values = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_from_hex() {
        let editor = ColorEditor::new("#4f39f6");
        assert_eq!(editor.input_values().hex, "#4f39f6");
        assert_eq!(editor.input_values().rgb, "rgb(79, 57, 246)");
        assert_eq!(editor.hsv(), rgb_to_hsv(Rgb::new(79, 57, 246)));
        assert_eq!(editor.active_format(), None);
    }

    #[test]
    fn test_edit_valid_rgb_updates_other_fields() {
        let mut editor = ColorEditor::new("#000000");
        assert!(editor.edit(ColorFormat::Rgb, "rgb(255, 87, 51)"));

        // The typed field keeps the exact text, the others are re-derived.
        assert_eq!(editor.input_values().rgb, "rgb(255, 87, 51)");
        assert_eq!(editor.input_values().hex, "#ff5733");
        assert_eq!(editor.active_format(), Some(ColorFormat::Rgb));
        assert_eq!(editor.hsv(), rgb_to_hsv(Rgb::new(255, 87, 51)));
    }

    #[test]
    fn test_current_rgb_tracks_edit_within_rounding() {
        // The picker color goes through the rounded HSV state, so it may
        // drift by one unit per channel from the typed value.
        let mut editor = ColorEditor::new("#000000");
        editor.edit(ColorFormat::Rgb, "rgb(255, 87, 51)");
        let current = editor.current_rgb();
        assert!((current.r as i16 - 255).abs() <= 1);
        assert!((current.g as i16 - 87).abs() <= 1);
        assert!((current.b as i16 - 51).abs() <= 1);
    }

    #[test]
    fn test_edit_preserves_typed_text_verbatim() {
        let mut editor = ColorEditor::new("#000000");
        // Unusual but valid spacing must survive the resync untouched.
        assert!(editor.edit(ColorFormat::Rgb, "rgb( 255 ,87,  51 )"));
        assert_eq!(editor.input_values().rgb, "rgb( 255 ,87,  51 )");
        assert_eq!(editor.input_values().hex, "#ff5733");
    }

    #[test]
    fn test_edit_invalid_does_not_touch_state_of_record() {
        let mut editor = ColorEditor::new("#4f39f6");
        let before = editor.hsv();

        assert!(!editor.edit(ColorFormat::Hex, "#zzzzzz"));
        assert_eq!(editor.hsv(), before);
        // The invalid text stays visible in its field while editing.
        assert_eq!(editor.input_values().hex, "#zzzzzz");
        // The other fields still hold the last valid state.
        assert_eq!(editor.input_values().rgb, "rgb(79, 57, 246)");
    }

    #[test]
    fn test_blur_reverts_invalid_field_only() {
        let mut editor = ColorEditor::new("#4f39f6");
        editor.edit(ColorFormat::Hex, "#zzzzzz");
        editor.blur(ColorFormat::Hex);

        assert_eq!(editor.input_values().hex, "#4f39f6");
        assert_eq!(editor.input_values().rgb, "rgb(79, 57, 246)");
        assert_eq!(editor.active_format(), None);
    }

    #[test]
    fn test_blur_keeps_valid_text() {
        let mut editor = ColorEditor::new("#000000");
        editor.edit(ColorFormat::Hex, "FF5733");
        editor.blur(ColorFormat::Hex);
        // Valid text is committed as typed, even without the leading '#'.
        assert_eq!(editor.input_values().hex, "FF5733");
        assert_eq!(editor.input_values().rgb, "rgb(255, 87, 51)");
    }

    #[test]
    fn test_update_hsv_clears_active_format() {
        let mut editor = ColorEditor::new("#ff0000");
        editor.edit(ColorFormat::Hex, "#00ff00");
        assert_eq!(editor.active_format(), Some(ColorFormat::Hex));

        editor.update_hsv(Some(240.0), None, None);
        assert_eq!(editor.active_format(), None);
        assert_eq!(editor.current_rgb(), Rgb::new(0, 0, 255));
        assert_eq!(editor.input_values().hex, "#0000ff");
    }

    #[test]
    fn test_hue_preserved_at_zero_saturation() {
        let mut editor = ColorEditor::new("#ff0000");
        editor.update_hsv(None, Some(0.0), None);
        // RGB collapses to white, but the recorded hue stays put.
        assert_eq!(editor.hsv().h, 0.0);
        assert_eq!(editor.current_rgb(), Rgb::WHITE);

        editor.update_hsv(Some(120.0), None, None);
        editor.update_hsv(None, Some(100.0), None);
        assert_eq!(editor.current_rgb(), Rgb::new(0, 255, 0));
    }
}
