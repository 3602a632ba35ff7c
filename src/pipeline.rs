//! # Scan Pipeline Module
//!
//! Orchestrates the full text-to-classification pipeline:
//!
//! ```text
//! Normalize -> Extract -> Segment -> {Validate -> Canonicalize -> Classify}* -> Assemble
//! ```
//!
//! The pipeline is a pure function of `(raw_text, recognition_confidence)`:
//! it performs no I/O, reads no shared mutable state, and holds nothing
//! between scans. Because the knowledge base is immutable after first
//! construction, any number of scans may run concurrently without
//! coordination. There are exactly two fatal exits: text too short after
//! normalization, and zero ingredients surviving validation; everything
//! else (missing marker, unknown ingredients) degrades softly.

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::allergens::detect_allergens;
use crate::canonical::canonicalize_name;
use crate::concerns::generate_concerns;
use crate::confidence::score_confidence;
use crate::config::ScanConfig;
use crate::errors::{AppError, AppResult};
use crate::extraction::extract_ingredient_list;
use crate::knowledge::{SafetyKnowledgeBase, SafetyRating};
use crate::normalize::normalize_label_text;
use crate::recognition::{normalize_confidence, RecognitionOutput};
use crate::segmentation::{is_valid_segment, split_ingredient_segments};

/// One fully classified ingredient from a scanned label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedIngredient {
    /// Display name, as it appeared on the label (trimmed)
    pub name: String,
    /// Resolved safety classification
    pub rating: SafetyRating,
    /// Explanation from the matched safety record
    pub explanation: String,
    /// Classification confidence, 0-98
    pub confidence: u8,
    /// Allergen keywords literally present in the canonical name
    pub allergens: Vec<String>,
    /// Generated concern list, fixed order
    pub concerns: Vec<String>,
    /// Citation tags carried through from the safety record
    pub sources: Vec<String>,
    /// 1-based index of appearance on the label; duplicates keep their own
    /// positions, nothing is merged or sorted
    pub position: u32,
}

/// Aggregate result for one scanned label
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    /// Classified ingredients in order of appearance
    pub ingredients: Vec<ProcessedIngredient>,
    /// The recognition engine's confidence carried through unchanged
    /// (unit-normalized to 0-100), not derived from per-ingredient scores
    pub confidence: u8,
    /// The raw text the scan was run on
    pub raw_text: String,
}

/// The label scan pipeline
///
/// Cheap to construct and safe to share; holds only configuration.
pub struct LabelScanner {
    config: ScanConfig,
}

impl LabelScanner {
    /// Create a scanner with the default configuration
    ///
    /// # Examples
    ///
    /// ```rust
    /// use label_lens::pipeline::LabelScanner;
    ///
    /// let scanner = LabelScanner::new();
    /// let result = scanner.scan("Ingredients: Water, Salt", 0.9).unwrap();
    /// assert_eq!(result.ingredients.len(), 2);
    /// assert_eq!(result.confidence, 90);
    /// ```
    pub fn new() -> Self {
        Self {
            config: ScanConfig::default(),
        }
    }

    /// Create a scanner with custom configuration
    ///
    /// # Errors
    ///
    /// Returns a `Config` error when the configuration fails validation
    pub fn with_config(config: ScanConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run the full pipeline over recognition-engine output
    pub fn scan_recognized(&self, output: &RecognitionOutput) -> AppResult<ScanResult> {
        self.scan(&output.text, output.confidence)
    }

    /// Run the full pipeline over raw recognized text
    ///
    /// # Arguments
    ///
    /// * `raw_text` - Raw text from the recognition engine; may contain
    ///   noise, line breaks, and unrelated label copy
    /// * `recognition_confidence` - The engine's confidence, as a [0,1]
    ///   fraction or a [0,100] percentage
    ///
    /// # Errors
    ///
    /// * `EmptyOrTooShortText` - normalized text is below the minimum length
    /// * `NoValidIngredientsParsed` - no segment survived validation
    pub fn scan(&self, raw_text: &str, recognition_confidence: f32) -> AppResult<ScanResult> {
        let normalized = normalize_label_text(raw_text);
        if normalized.len() < self.config.min_text_length {
            debug!(
                "Aborting scan: normalized text too short ({} < {} chars)",
                normalized.len(),
                self.config.min_text_length
            );
            return Err(AppError::EmptyOrTooShortText);
        }

        let segment = extract_ingredient_list(&normalized);
        let raw_segments = split_ingredient_segments(&segment.text);

        let kb = SafetyKnowledgeBase::global();
        let mut ingredients = Vec::new();
        let mut position: u32 = 0;

        for raw_segment in &raw_segments {
            if !is_valid_segment(raw_segment, &self.config) {
                continue;
            }

            let canonical = canonicalize_name(raw_segment);
            if canonical.len() < self.config.min_canonical_length {
                trace!("Dropping segment with short canonical name: '{}'", raw_segment);
                continue;
            }

            let lookup = kb.lookup(&canonical);
            let rating = lookup.record.rating;
            let allergens = detect_allergens(&canonical);
            let concerns = generate_concerns(&canonical, rating);
            let confidence = score_confidence(&canonical, rating, lookup.match_kind, &self.config);

            position += 1;
            ingredients.push(ProcessedIngredient {
                name: raw_segment.trim().to_string(),
                rating,
                explanation: lookup.record.explanation.to_string(),
                confidence,
                allergens,
                concerns,
                sources: lookup
                    .record
                    .sources
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                position,
            });
        }

        if ingredients.is_empty() {
            debug!(
                "Aborting scan: {} raw segments, none survived validation",
                raw_segments.len()
            );
            return Err(AppError::NoValidIngredientsParsed);
        }

        let avoid_count = ingredients
            .iter()
            .filter(|i| i.rating == SafetyRating::Avoid)
            .count();
        info!(
            "Scan complete: {} ingredients classified ({} flagged avoid), marker={:?}",
            ingredients.len(),
            avoid_count,
            segment.marker
        );

        Ok(ScanResult {
            ingredients,
            confidence: normalize_confidence(recognition_confidence),
            raw_text: raw_text.to_string(),
        })
    }
}

impl Default for LabelScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_aborts() {
        let scanner = LabelScanner::new();
        assert_eq!(scanner.scan("Hi", 0.9), Err(AppError::EmptyOrTooShortText));
        assert_eq!(scanner.scan("", 0.9), Err(AppError::EmptyOrTooShortText));
    }

    #[test]
    fn test_no_valid_ingredients_aborts() {
        let scanner = LabelScanner::new();
        // Long enough to pass the length gate, but every segment is noise
        let result = scanner.scan("Ingredients: 1, 2, 3, 4, 5, 6, 7", 0.9);
        assert_eq!(result, Err(AppError::NoValidIngredientsParsed));
    }

    #[test]
    fn test_positions_are_strictly_increasing_and_one_based() {
        let scanner = LabelScanner::new();
        let result = scanner
            .scan("Ingredients: Water, 77, Sugar, !!, Salt", 0.9)
            .unwrap();
        let positions: Vec<u32> = result.ingredients.iter().map(|i| i.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn test_duplicates_not_merged() {
        let scanner = LabelScanner::new();
        let result = scanner.scan("Ingredients: Sugar, Water, Sugar", 0.9).unwrap();
        assert_eq!(result.ingredients.len(), 3);
        assert_eq!(result.ingredients[0].name, "Sugar");
        assert_eq!(result.ingredients[2].name, "Sugar");
        assert_ne!(result.ingredients[0].position, result.ingredients[2].position);
    }

    #[test]
    fn test_overall_confidence_is_carried_through() {
        let scanner = LabelScanner::new();
        let fractional = scanner.scan("Ingredients: Water, Salt", 0.73).unwrap();
        assert_eq!(fractional.confidence, 73);

        let percentage = scanner.scan("Ingredients: Water, Salt", 73.0).unwrap();
        assert_eq!(percentage.confidence, 73);
    }

    #[test]
    fn test_raw_text_preserved_on_result() {
        let scanner = LabelScanner::new();
        let raw = "Ingredients:\nWater, Salt";
        let result = scanner.scan(raw, 1.0).unwrap();
        assert_eq!(result.raw_text, raw);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ScanConfig {
            min_text_length: 0,
            ..Default::default()
        };
        assert!(LabelScanner::with_config(config).is_err());
    }
}
