//! # Label-Lens
//!
//! Turns free-form text recognized from a photographed food-ingredient
//! label into a structured, per-ingredient safety assessment: a rating, an
//! explanation, a confidence score, detected allergens, and generated
//! concerns, plus an aggregate result for the whole label.

pub mod allergens;
pub mod canonical;
pub mod concerns;
pub mod confidence;
pub mod config;
pub mod engine;
pub mod errors;
pub mod extraction;
pub mod knowledge;
pub mod normalize;
pub mod pipeline;
pub mod recognition;
pub mod segmentation;

// Re-export types for easier access
pub use errors::{AppError, AppResult};
pub use knowledge::{SafetyKnowledgeBase, SafetyRating, SafetyRecord};
pub use pipeline::{LabelScanner, ProcessedIngredient, ScanResult};
pub use recognition::{RecognitionEngine, RecognitionOutput};
