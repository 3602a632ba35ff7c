//! # Text Normalization Module
//!
//! Cleans raw OCR output before any parsing happens: line breaks become
//! spaces, whitespace runs collapse to a single space, and smart quotes are
//! folded to their straight forms. The normalizer is a total function with
//! no failure modes.

use tracing::trace;

/// Normalize raw recognized label text into a single clean line
///
/// # Arguments
///
/// * `raw` - The raw text produced by the recognition engine
///
/// # Returns
///
/// Returns the normalized text: single-spaced, straight-quoted, trimmed
///
/// # Examples
///
/// ```rust
/// use label_lens::normalize::normalize_label_text;
///
/// let cleaned = normalize_label_text("INGREDIENTS:\nWater,  Sugar,\nSalt ");
/// assert_eq!(cleaned, "INGREDIENTS: Water, Sugar, Salt");
/// ```
pub fn normalize_label_text(raw: &str) -> String {
    let unquoted: String = raw
        .chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            _ => c,
        })
        .collect();

    // split_whitespace handles newlines, tabs, and runs of spaces in one pass
    let normalized = unquoted.split_whitespace().collect::<Vec<&str>>().join(" ");

    trace!(
        "Normalized label text: {} chars -> {} chars",
        raw.len(),
        normalized.len()
    );
    normalized
}
