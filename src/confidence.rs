//! # Confidence Scoring Module
//!
//! Heuristic per-ingredient confidence score. This expresses certainty in
//! the *classification* of one ingredient and is distinct from the
//! recognition engine's text confidence, which is carried through on the
//! scan result unchanged.
//!
//! Scoring:
//! - base 70
//! - +20 when the canonical name has an exact knowledge-base key. Records
//!   resolved through the substring fallback do NOT receive this bonus, so
//!   an ingredient can be rated via fallback yet score as unknown. The
//!   asymmetry is intentional and kept for behavioral parity.
//! - +10 when the canonical name contains no space; single-token names are
//!   easier to classify confidently
//! - +5 for a Safe rating, +10 for Avoid; negative classifications are
//!   treated as more certain than positive ones
//! - capped at the configured maximum (98)

use crate::config::ScanConfig;
use crate::knowledge::{MatchKind, SafetyRating};

/// Score classification confidence for one ingredient
///
/// Never negative; never above the configured cap.
///
/// # Examples
///
/// ```rust
/// use label_lens::config::ScanConfig;
/// use label_lens::confidence::score_confidence;
/// use label_lens::knowledge::{MatchKind, SafetyRating};
///
/// let config = ScanConfig::default();
///
/// // water: exact match, single token, Safe -> 70 + 20 + 10 + 5, capped at 98
/// assert_eq!(
///     score_confidence("water", SafetyRating::Safe, MatchKind::Exact, &config),
///     98
/// );
///
/// // unknown multi-word name rated Caution by default -> just the base
/// assert_eq!(
///     score_confidence("xanthan gum", SafetyRating::Caution, MatchKind::Default, &config),
///     70
/// );
/// ```
pub fn score_confidence(
    canonical_name: &str,
    rating: SafetyRating,
    match_kind: MatchKind,
    config: &ScanConfig,
) -> u8 {
    let mut score: u32 = 70;

    if match_kind == MatchKind::Exact {
        score += 20;
    }

    if !canonical_name.contains(' ') {
        score += 10;
    }

    match rating {
        SafetyRating::Safe => score += 5,
        SafetyRating::Avoid => score += 10,
        SafetyRating::Caution => {}
    }

    score.min(config.max_ingredient_confidence as u32) as u8
}
