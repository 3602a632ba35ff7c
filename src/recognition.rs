//! # Recognition Interface Module
//!
//! The seam between the scan pipeline and the external recognition engine.
//! The engine converts a photographed label into raw text plus a confidence
//! value; everything about cameras, permissions, and the engine's own
//! lifecycle lives behind the `RecognitionEngine` trait. The pipeline only
//! ever sees a `RecognitionOutput`.

use crate::errors::AppResult;

/// Output of one recognition pass over a captured label image
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionOutput {
    /// Raw recognized text; may contain noise, line breaks, unrelated text
    pub text: String,
    /// Engine confidence, either a [0,1] fraction or a [0,100] percentage
    pub confidence: f32,
}

/// A recognition engine that can read text from a label image
pub trait RecognitionEngine {
    /// Run recognition over the image at `image_path`
    ///
    /// Garbled or empty text is a normal output, not an error; errors are
    /// reserved for the engine itself failing (bad image, engine fault).
    fn recognize(&mut self, image_path: &str) -> AppResult<RecognitionOutput>;
}

/// Normalize an engine confidence value to a [0,100] percentage
///
/// Values at or below 1.0 are treated as [0,1] fractions and scaled;
/// anything else is taken as a percentage. The result is clamped so a
/// misbehaving engine can never push the aggregate outside [0,100].
///
/// # Examples
///
/// ```rust
/// use label_lens::recognition::normalize_confidence;
///
/// assert_eq!(normalize_confidence(0.87), 87);
/// assert_eq!(normalize_confidence(87.0), 87);
/// assert_eq!(normalize_confidence(1.0), 100);
/// assert_eq!(normalize_confidence(250.0), 100);
/// assert_eq!(normalize_confidence(-3.0), 0);
/// ```
pub fn normalize_confidence(confidence: f32) -> u8 {
    let percentage = if confidence <= 1.0 {
        confidence * 100.0
    } else {
        confidence
    };
    percentage.clamp(0.0, 100.0).round() as u8
}
