//! # Application Error Types
//!
//! This module defines common error types used throughout the label-lens crate.
//! It provides structured error handling for the scan pipeline and the
//! recognition engine adapter.

use std::fmt;

/// General application error type for consistent error handling
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Normalized label text is below the minimum analyzable length
    EmptyOrTooShortText,
    /// No segment survived validation and canonicalization
    NoValidIngredientsParsed,
    /// Configuration validation errors
    Config(String),
    /// Recognition engine errors (acquisition, image loading, extraction)
    Recognition(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::EmptyOrTooShortText => {
                write!(
                    f,
                    "[EMPTY_TEXT] Recognized text is empty or too short to analyze"
                )
            }
            AppError::NoValidIngredientsParsed => {
                write!(
                    f,
                    "[NO_INGREDIENTS] No valid ingredients could be parsed from the label"
                )
            }
            AppError::Config(msg) => write!(f, "[CONFIG] {}", msg),
            AppError::Recognition(msg) => write!(f, "[RECOGNITION] {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Recognition(err.to_string())
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_kind_tag() {
        assert!(AppError::EmptyOrTooShortText
            .to_string()
            .starts_with("[EMPTY_TEXT]"));
        assert!(AppError::NoValidIngredientsParsed
            .to_string()
            .starts_with("[NO_INGREDIENTS]"));
        assert_eq!(
            AppError::Config("bad value".to_string()).to_string(),
            "[CONFIG] bad value"
        );
    }

    #[test]
    fn test_anyhow_conversion_maps_to_recognition() {
        let err: AppError = anyhow::anyhow!("tesseract init failed").into();
        assert_eq!(
            err,
            AppError::Recognition("tesseract init failed".to_string())
        );
    }
}
