//! Color space conversions between HEX, RGB, HSV and HSL.
//!
//! RGB (8-bit per channel) is the canonical internal representation; HSV is
//! what the interactive layers hold on to, since it keeps hue stable when
//! saturation or value drop to zero. All functions here are pure and total
//! for in-range input.

use serde::{Deserialize, Serialize};

/// An sRGB color with integer channels in 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// Hue in degrees (0-360), saturation and value in percent (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Hue in degrees (0-360), saturation and lightness in percent (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Parse a 6-digit hex string (leading `#` optional) into RGB.
///
/// Malformed input yields black. Callers that need to distinguish bad input
/// from an actual black should go through [`crate::core::color::parse::parse_hex`].
pub fn hex_to_rgb(hex: &str) -> Rgb {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Rgb::BLACK;
    }
    // The length/digit check above guarantees these cannot fail.
    let r = u8::from_str_radix(&digits[0..2], 16).unwrap_or(0);
    let g = u8::from_str_radix(&digits[2..4], 16).unwrap_or(0);
    let b = u8::from_str_radix(&digits[4..6], 16).unwrap_or(0);
    Rgb { r, g, b }
}

/// Format RGB as a lowercase `#rrggbb` string.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// Convert RGB to HSV. Components are rounded to whole numbers.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = max - min;

    let s = if max == 0.0 { 0.0 } else { diff / max * 100.0 };
    let v = max * 100.0;

    let mut h = 0.0;
    if diff != 0.0 {
        if max == r {
            h = ((g - b) / diff) % 6.0;
        } else if max == g {
            h = (b - r) / diff + 2.0;
        } else {
            h = (r - g) / diff + 4.0;
        }
    }

    let mut h = (h * 60.0).round();
    if h < 0.0 {
        h += 360.0;
    }

    Hsv {
        h,
        s: s.round(),
        v: v.round(),
    }
}

/// Convert HSV to RGB via the 60-degree sector decomposition.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let h = hsv.h;
    let s = hsv.s / 100.0;
    let v = hsv.v / 100.0;

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if (0.0..60.0).contains(&h) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, c)
    } else if (300.0..360.0).contains(&h) {
        (c, 0.0, x)
    } else {
        (0.0, 0.0, 0.0)
    };

    Rgb {
        r: ((r + m) * 255.0).round() as u8,
        g: ((g + m) * 255.0).round() as u8,
        b: ((b + m) * 255.0).round() as u8,
    }
}

/// Convert RGB to HSL. Components are rounded to whole numbers.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic: hue is meaningless, report 0.
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: (l * 100.0).round(),
        };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let mut h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    h *= 60.0;

    Hsl {
        h: h.round(),
        s: (s * 100.0).round(),
        l: (l * 100.0).round(),
    }
}

/// Convert HSL to RGB using the `hue2rgb` helper at +1/3, 0 and -1/3 phase
/// offsets for the three channels.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h / 360.0;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb {
        r: (hue2rgb(p, q, h + 1.0 / 3.0) * 255.0).round() as u8,
        g: (hue2rgb(p, q, h) * 255.0).round() as u8,
        b: (hue2rgb(p, q, h - 1.0 / 3.0) * 255.0).round() as u8,
    }
}

fn hue2rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Derive HSL directly from HSV without routing through RGB.
///
/// Guarded against division by zero when lightness lands on 0 or 100.
pub fn hsv_to_hsl(hsv: Hsv) -> Hsl {
    let l = (2.0 - hsv.s / 100.0) * hsv.v / 2.0;
    let s = if l != 0.0 && l != 100.0 {
        (hsv.v - l) / l.min(100.0 - l) * 100.0
    } else {
        0.0
    };

    Hsl {
        h: hsv.h.round(),
        s: s.max(0.0).round(),
        l: l.round(),
    }
}
