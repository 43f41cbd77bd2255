//! Utility modules for common functionality
//!
//! This module contains helpers used throughout the application:
//! - `logging`: Logging configuration and setup

pub mod logging;
