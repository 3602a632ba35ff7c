//! # Allergen Detection Module
//!
//! Scans a canonical ingredient name against a fixed list of allergen
//! keywords. Every keyword that appears as a literal substring is collected,
//! not just the first; overlapping hits (e.g. "dairy" and "milk" in the same
//! name) are all reported without semantic deduplication. Nothing is
//! inferred: "whole milk powder" reports "milk" but not "dairy", because
//! "dairy" does not literally appear.

use tracing::trace;

/// Fixed allergen keyword list, covering the major recognized allergen
/// groups plus the derived markers OCR labels commonly carry
pub const ALLERGEN_KEYWORDS: &[&str] = &[
    "milk",
    "eggs",
    "fish",
    "shellfish",
    "tree nuts",
    "peanuts",
    "wheat",
    "soybeans",
    "dairy",
    "lactose",
    "gluten",
    "casein",
    "whey",
];

/// Collect every allergen keyword appearing in the canonical name
///
/// # Examples
///
/// ```rust
/// use label_lens::allergens::detect_allergens;
///
/// assert_eq!(detect_allergens("whole milk powder"), vec!["milk"]);
/// assert_eq!(detect_allergens("whey protein (milk)"), vec!["milk", "whey"]);
/// assert!(detect_allergens("olive oil").is_empty());
/// ```
pub fn detect_allergens(canonical_name: &str) -> Vec<String> {
    let lowered = canonical_name.to_lowercase();
    let hits: Vec<String> = ALLERGEN_KEYWORDS
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect();

    if !hits.is_empty() {
        trace!("Allergen keywords in '{}': {:?}", canonical_name, hits);
    }
    hits
}
