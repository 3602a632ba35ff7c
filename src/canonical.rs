//! # Name Canonicalization Module
//!
//! Derives the lookup key used by every downstream classifier from one
//! validated raw segment. Parenthetical and bracketed sub-ingredient content
//! is removed entirely, residual punctuation stripped, whitespace collapsed,
//! and the result lowercased. Canonicalization is idempotent: re-applying it
//! to its own output yields the same string.

use tracing::trace;

/// Canonicalize a raw ingredient segment into its lookup key
///
/// # Arguments
///
/// * `segment` - A validated raw ingredient segment
///
/// # Returns
///
/// Returns the canonical ingredient name
///
/// # Examples
///
/// ```rust
/// use label_lens::canonical::canonicalize_name;
///
/// assert_eq!(canonicalize_name("Vitamin C (Ascorbic Acid)"), "vitamin c");
/// assert_eq!(canonicalize_name("Niacin [Vitamin B3];"), "niacin");
/// assert_eq!(
///     canonicalize_name(&canonicalize_name("Sodium Benzoate.")),
///     canonicalize_name("Sodium Benzoate.")
/// );
/// ```
pub fn canonicalize_name(segment: &str) -> String {
    let mut stripped = String::with_capacity(segment.len());
    let mut paren_depth: u32 = 0;
    let mut bracket_depth: u32 = 0;

    // Depth counters rather than a regex so nested groups are removed whole
    for ch in segment.chars() {
        match ch {
            '(' => paren_depth += 1,
            ')' => paren_depth = paren_depth.saturating_sub(1),
            '[' => bracket_depth += 1,
            ']' => bracket_depth = bracket_depth.saturating_sub(1),
            _ if paren_depth == 0 && bracket_depth == 0 => {
                if !matches!(ch, '.' | ',' | ';') {
                    stripped.push(ch);
                }
            }
            _ => {}
        }
    }

    let canonical = stripped
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
        .to_lowercase();

    trace!("Canonicalized '{}' -> '{}'", segment, canonical);
    canonical
}
