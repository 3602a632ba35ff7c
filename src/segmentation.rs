//! # Ingredient Segmentation Module
//!
//! Splits an ingredient enumeration into individual ingredient strings and
//! filters out segments that cannot be valid ingredient names.
//!
//! ## Why not a plain comma split
//!
//! Ingredient labels routinely nest sub-ingredients in parentheses, e.g.
//! "Vitamin C (Ascorbic Acid)" or "Chocolate (Cocoa Mass, Cocoa Butter)".
//! A naive comma split would fragment these into bogus entries, so the
//! splitter tracks parenthesis depth and only splits on commas at depth 0.
//! Commas inside parentheses are preserved verbatim within their segment.
//!
//! ## Validation
//!
//! OCR noise produces stray punctuation, lone digits, and truncated
//! fragments. The validator drops any segment that is too short, too long,
//! or does not start with a letter, before it can reach the knowledge base.

use crate::config::ScanConfig;
use tracing::{debug, trace};

/// Split an ingredient enumeration on top-level commas
///
/// Scans character by character maintaining a parenthesis-depth counter;
/// a comma only separates ingredients when the counter is at zero. The
/// trailing accumulated segment is emitted even without a final delimiter.
/// Single pass, position-preserving.
///
/// # Arguments
///
/// * `list_text` - The ingredient enumeration text
///
/// # Returns
///
/// Returns the ordered sequence of raw segment strings
///
/// # Examples
///
/// ```rust
/// use label_lens::segmentation::split_ingredient_segments;
///
/// let segments = split_ingredient_segments("Vitamin C (Ascorbic Acid), Salt");
/// assert_eq!(segments, vec!["Vitamin C (Ascorbic Acid)", "Salt"]);
/// ```
pub fn split_ingredient_segments(list_text: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut depth: u32 = 0;

    for ch in list_text.chars() {
        match ch {
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                // Saturating so a stray OCR closing paren cannot suppress
                // every later split
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            ',' if depth == 0 => {
                let segment = current.trim();
                if !segment.is_empty() {
                    segments.push(segment.to_string());
                }
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    // Trailing segment has no delimiter after it
    let trailing = current.trim();
    if !trailing.is_empty() {
        segments.push(trailing.to_string());
    }

    debug!(
        "Split ingredient list into {} raw segments",
        segments.len()
    );
    segments
}

/// Check whether a raw segment can be a valid ingredient name
///
/// Rejects a segment if its trimmed length is at or below the configured
/// floor, at or above the configured ceiling, or if its first character is
/// not a letter. Total function, never raises.
///
/// # Examples
///
/// ```rust
/// use label_lens::config::ScanConfig;
/// use label_lens::segmentation::is_valid_segment;
///
/// let config = ScanConfig::default();
/// assert!(is_valid_segment("Salt", &config));
/// assert!(!is_valid_segment("7", &config));
/// assert!(!is_valid_segment("(damaged fragment", &config));
/// ```
pub fn is_valid_segment(segment: &str, config: &ScanConfig) -> bool {
    let trimmed = segment.trim();

    if trimmed.len() <= config.min_segment_length {
        trace!("Rejecting segment below length floor: '{}'", trimmed);
        return false;
    }

    if trimmed.len() >= config.max_segment_length {
        trace!("Rejecting segment above length ceiling: '{}'", trimmed);
        return false;
    }

    match trimmed.chars().next() {
        Some(first) if first.is_alphabetic() => true,
        _ => {
            trace!("Rejecting segment with non-letter start: '{}'", trimmed);
            false
        }
    }
}
