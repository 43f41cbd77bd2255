//! The color engine.
//!
//! Pure, synchronous computation over numeric and string inputs, with no
//! I/O and no shared state. Organized into logical layers:
//! - `space`: conversions among HEX, RGB, HSV and HSL
//! - `parse`: validation and parsing of textual color formats
//! - `scale`: 11-level shade scale generation
//! - `semantic`: role -> color palette derivation
//! - `editor`: the input-field state machine built on top of the above

pub mod editor;
pub mod parse;
pub mod scale;
pub mod semantic;
pub mod space;

pub use editor::{ColorEditor, ColorValues};
pub use parse::ColorFormat;
pub use scale::{ColorScale, ScaleStrategy, SCALE_LEVELS};
pub use semantic::{GrayScaleName, RoleKey, SemanticPalette, SemanticRole};
pub use space::{Hsl, Hsv, Rgb};
