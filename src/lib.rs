//! shadegen: design-system color scales and semantic tokens from one base
//! color.
//!
//! The `core` module is the pure engine (color-space conversion, textual
//! format parsing, shade-scale generation, semantic-role mapping); `cli`,
//! `config` and `utils` are the command-line frontend built on top of it.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;
