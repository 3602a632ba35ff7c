//! # Ingredient List Extraction Module
//!
//! Locates the ingredient enumeration inside arbitrary label text. Food
//! labels bury the actual ingredient list between nutrition panels,
//! marketing copy, and barcodes; this module finds it by trying a fixed,
//! ordered set of case-insensitive marker patterns:
//!
//! 1. `ingredients[:]`
//! 2. `contains[:]`
//! 3. `made with[:]`
//!
//! The first marker that matches wins and its captured remainder becomes the
//! list segment. When no marker matches, the whole text is used as the
//! segment — a soft fallback, not an error, because OCR regularly mangles or
//! crops the heading while leaving the enumeration itself intact.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

/// Which marker pattern located the ingredient list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    /// Matched an "ingredients" heading
    Ingredients,
    /// Matched a "contains" heading
    Contains,
    /// Matched a "made with" heading
    MadeWith,
}

/// The portion of the label text identified as the ingredient enumeration
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientListSegment {
    /// The extracted enumeration text
    pub text: String,
    /// The marker that matched, or `None` when the whole text was used
    /// as a fallback segment
    pub marker: Option<ListMarker>,
}

lazy_static! {
    static ref MARKER_PATTERNS: Vec<(ListMarker, Regex)> = vec![
        (
            ListMarker::Ingredients,
            Regex::new(r"(?i)\bingredients\s*:?\s*(?P<rest>.+)$")
                .expect("ingredients marker pattern should be valid"),
        ),
        (
            ListMarker::Contains,
            Regex::new(r"(?i)\bcontains\s*:?\s*(?P<rest>.+)$")
                .expect("contains marker pattern should be valid"),
        ),
        (
            ListMarker::MadeWith,
            Regex::new(r"(?i)\bmade with\s*:?\s*(?P<rest>.+)$")
                .expect("made-with marker pattern should be valid"),
        ),
    ];
}

/// Extract the ingredient enumeration from normalized label text
///
/// Tries each marker pattern in fixed order; the first match wins.
/// Deterministic and total: unmarked text falls back to a whole-text
/// segment rather than failing.
///
/// # Arguments
///
/// * `text` - Normalized label text
///
/// # Examples
///
/// ```rust
/// use label_lens::extraction::{extract_ingredient_list, ListMarker};
///
/// let segment = extract_ingredient_list("Net wt 300g. Ingredients: Water, Salt");
/// assert_eq!(segment.text, "Water, Salt");
/// assert_eq!(segment.marker, Some(ListMarker::Ingredients));
///
/// let fallback = extract_ingredient_list("Water, Salt, Yeast");
/// assert_eq!(fallback.text, "Water, Salt, Yeast");
/// assert_eq!(fallback.marker, None);
/// ```
pub fn extract_ingredient_list(text: &str) -> IngredientListSegment {
    for (marker, pattern) in MARKER_PATTERNS.iter() {
        if let Some(capture) = pattern.captures(text) {
            if let Some(rest) = capture.name("rest") {
                debug!(
                    "Ingredient list located via {:?} marker ({} chars)",
                    marker,
                    rest.as_str().len()
                );
                return IngredientListSegment {
                    text: rest.as_str().trim().to_string(),
                    marker: Some(*marker),
                };
            }
        }
    }

    debug!("No ingredient marker found, using whole text as segment");
    IngredientListSegment {
        text: text.trim().to_string(),
        marker: None,
    }
}
