//! # Scan Configuration
//!
//! Configuration options for the label scan pipeline, with validation in the
//! same style as the rest of the crate: invalid values produce a `Config`
//! error at construction time, never a panic mid-scan.

use crate::errors::{AppError, AppResult};

/// Configuration options for the scan pipeline
#[derive(Clone, Debug)]
pub struct ScanConfig {
    /// Minimum length of the normalized label text; anything shorter aborts
    /// the scan with `EmptyOrTooShortText`
    pub min_text_length: usize,
    /// Minimum raw segment length accepted by the validator (exclusive floor:
    /// segments of this length or shorter are dropped)
    pub min_segment_length: usize,
    /// Maximum raw segment length accepted by the validator (exclusive
    /// ceiling: segments of this length or longer are dropped)
    pub max_segment_length: usize,
    /// Minimum canonical name length; shorter names never reach the result
    pub min_canonical_length: usize,
    /// Cap applied to every per-ingredient confidence score
    pub max_ingredient_confidence: u8,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            min_text_length: 10,
            min_segment_length: 1,
            max_segment_length: 50,
            min_canonical_length: 2,
            max_ingredient_confidence: 98,
        }
    }
}

impl ScanConfig {
    /// Validate scan configuration parameters
    pub fn validate(&self) -> AppResult<()> {
        if self.min_text_length == 0 {
            return Err(AppError::Config(
                "min_text_length must be greater than 0".to_string(),
            ));
        }

        if self.max_segment_length <= self.min_segment_length {
            return Err(AppError::Config(format!(
                "max_segment_length ({}) must be greater than min_segment_length ({})",
                self.max_segment_length, self.min_segment_length
            )));
        }

        if self.min_canonical_length == 0 {
            return Err(AppError::Config(
                "min_canonical_length must be greater than 0".to_string(),
            ));
        }

        if self.max_ingredient_confidence > 100 {
            return Err(AppError::Config(format!(
                "max_ingredient_confidence ({}) cannot exceed 100",
                self.max_ingredient_confidence
            )));
        }

        Ok(())
    }
}
