//! # Concern Generation Module
//!
//! Produces the rule-based concern list for one ingredient from its resolved
//! rating and canonical name. Rating concerns come first, then additive
//! type-tags triggered by name substrings. Order is fixed and each check
//! fires at most once, so no deduplication is needed.

use crate::knowledge::SafetyRating;

/// Generate the ordered concern list for an ingredient
///
/// Avoid contributes two fixed concerns, Caution one, Safe none. Regardless
/// of rating, type-tags are appended when the canonical name indicates an
/// artificial, preservative, or coloring ingredient.
///
/// # Examples
///
/// ```rust
/// use label_lens::concerns::generate_concerns;
/// use label_lens::knowledge::SafetyRating;
///
/// let concerns = generate_concerns("red dye 40", SafetyRating::Avoid);
/// assert_eq!(
///     concerns,
///     vec![
///         "may pose health risks",
///         "consider avoiding",
///         "contains artificial coloring",
///     ]
/// );
///
/// assert!(generate_concerns("water", SafetyRating::Safe).is_empty());
/// ```
pub fn generate_concerns(canonical_name: &str, rating: SafetyRating) -> Vec<String> {
    let mut concerns = Vec::new();

    match rating {
        SafetyRating::Avoid => {
            concerns.push("may pose health risks".to_string());
            concerns.push("consider avoiding".to_string());
        }
        SafetyRating::Caution => {
            concerns.push("consume in moderation".to_string());
        }
        SafetyRating::Safe => {}
    }

    if canonical_name.contains("artificial") || canonical_name.contains("synthetic") {
        concerns.push("contains artificial ingredients".to_string());
    }
    if canonical_name.contains("preservative") {
        concerns.push("contains preservatives".to_string());
    }
    if canonical_name.contains("color") || canonical_name.contains("dye") {
        concerns.push("contains artificial coloring".to_string());
    }

    concerns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avoid_rating_yields_two_concerns() {
        assert_eq!(
            generate_concerns("sodium benzoate", SafetyRating::Avoid),
            vec!["may pose health risks", "consider avoiding"]
        );
    }

    #[test]
    fn test_caution_rating_yields_one_concern() {
        assert_eq!(
            generate_concerns("sugar", SafetyRating::Caution),
            vec!["consume in moderation"]
        );
    }

    #[test]
    fn test_safe_rating_yields_no_concerns() {
        assert!(generate_concerns("water", SafetyRating::Safe).is_empty());
    }

    #[test]
    fn test_type_tags_append_after_rating_concerns() {
        assert_eq!(
            generate_concerns("artificial dye blend", SafetyRating::Avoid),
            vec![
                "may pose health risks",
                "consider avoiding",
                "contains artificial ingredients",
                "contains artificial coloring",
            ]
        );
    }

    #[test]
    fn test_type_tags_fire_even_for_safe_rating() {
        assert_eq!(
            generate_concerns("natural color extract", SafetyRating::Safe),
            vec!["contains artificial coloring"]
        );
    }

    #[test]
    fn test_preservative_tag() {
        assert_eq!(
            generate_concerns("preservative blend", SafetyRating::Caution),
            vec!["consume in moderation", "contains preservatives"]
        );
    }

    #[test]
    fn test_synthetic_triggers_artificial_tag() {
        assert_eq!(
            generate_concerns("synthetic vanillin", SafetyRating::Caution),
            vec!["consume in moderation", "contains artificial ingredients"]
        );
    }
}
