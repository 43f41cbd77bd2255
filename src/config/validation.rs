use crate::core::color::semantic::GrayScaleName;
use crate::error::{Result, ShadeGenError};

/// Centralized configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a CSS custom-property prefix: must start with a letter and
    /// contain only letters, digits and dashes.
    pub fn validate_prefix(prefix: &str) -> Result<()> {
        let trimmed = prefix.trim();
        if trimmed.is_empty() {
            return Err(ShadeGenError::Validation(
                "Variable prefix must not be empty".to_string(),
            ));
        }

        let mut chars = trimmed.chars();
        let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
        if !starts_with_letter || !trimmed.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(ShadeGenError::Validation(format!(
                "Invalid variable prefix '{}': use letters, digits and dashes, starting with a letter",
                prefix
            )));
        }

        Ok(())
    }

    /// Validate a gray-scale name against the known set. Used when the user
    /// explicitly sets the value; resolution at generation time still falls
    /// back silently.
    pub fn validate_gray_scale(name: &str) -> Result<()> {
        let known = GrayScaleName::ALL
            .iter()
            .any(|g| g.to_string() == name.trim().to_lowercase());
        if !known {
            return Err(ShadeGenError::Validation(format!(
                "Unknown gray scale '{}'. Available: slate, zinc, gray, neutral, stone",
                name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_prefix() {
        assert!(ConfigValidator::validate_prefix("primary").is_ok());
        assert!(ConfigValidator::validate_prefix("brand-2").is_ok());
        assert!(ConfigValidator::validate_prefix("").is_err());
        assert!(ConfigValidator::validate_prefix("2brand").is_err());
        assert!(ConfigValidator::validate_prefix("my prefix").is_err());
    }

    #[test]
    fn test_validate_gray_scale() {
        assert!(ConfigValidator::validate_gray_scale("slate").is_ok());
        assert!(ConfigValidator::validate_gray_scale("Stone").is_ok());
        assert!(ConfigValidator::validate_gray_scale("silver").is_err());
    }
}
