//! # Tesseract Recognition Engine Module
//!
//! Tesseract-backed implementation of the `RecognitionEngine` trait using
//! the `leptess` bindings. The engine is modeled as a scoped resource: an
//! explicit `acquire` either returns a ready handle or fails with a
//! `Recognition` error, and release runs on every exit path because the
//! handle owns its Tesseract instance and drops it deterministically. There
//! is no lazily-initialized singleton and no readiness flag to check before
//! each use.
//!
//! ## Image validation
//!
//! Before any OCR work, the image path is validated: the file must exist,
//! be a regular non-empty file under the configured size cap, and carry a
//! recognizable image header (sniffed via the `image` crate).

use anyhow::Result;
use leptess::LepTess;
use std::fs::File;
use std::io::{BufReader, Read};
use tracing::{debug, info};

use crate::errors::{AppError, AppResult};
use crate::recognition::{RecognitionEngine, RecognitionOutput};

/// Bytes read from the file head for format sniffing
const FORMAT_SNIFF_BYTES: usize = 64;

/// Configuration for the Tesseract engine
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Tesseract language codes, "+"-separated (e.g. "eng" or "eng+fra")
    pub languages: String,
    /// Explicit tessdata directory; `None` uses the system default
    pub tessdata_path: Option<String>,
    /// Maximum accepted image file size in bytes
    pub max_file_size: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            languages: "eng".to_string(),
            tessdata_path: None,
            max_file_size: 10 * 1024 * 1024,
        }
    }
}

impl EngineConfig {
    /// Build a configuration from the environment, falling back to defaults
    ///
    /// Honors `LABEL_LENS_OCR_LANGUAGES` and `LABEL_LENS_TESSDATA_PATH`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(languages) = std::env::var("LABEL_LENS_OCR_LANGUAGES") {
            if !languages.trim().is_empty() {
                config.languages = languages;
            }
        }
        if let Ok(path) = std::env::var("LABEL_LENS_TESSDATA_PATH") {
            if !path.trim().is_empty() {
                config.tessdata_path = Some(path);
            }
        }
        config
    }

    /// Validate engine configuration parameters
    pub fn validate(&self) -> AppResult<()> {
        if self.languages.trim().is_empty() {
            return Err(AppError::Config(
                "OCR languages cannot be empty".to_string(),
            ));
        }
        if self.max_file_size == 0 {
            return Err(AppError::Config(
                "max_file_size must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Validate an image path before handing it to Tesseract
pub fn validate_image_path(image_path: &str, config: &EngineConfig) -> Result<()> {
    let path = std::path::Path::new(image_path);

    if !path.exists() {
        return Err(anyhow::anyhow!(
            "Image validation failed: file does not exist ({})",
            image_path
        ));
    }

    if !path.is_file() {
        return Err(anyhow::anyhow!(
            "Image validation failed: path is not a file ({})",
            image_path
        ));
    }

    let file_size = path.metadata()?.len();
    if file_size == 0 {
        return Err(anyhow::anyhow!(
            "Image validation failed: file is empty ({})",
            image_path
        ));
    }
    if file_size > config.max_file_size {
        return Err(anyhow::anyhow!(
            "Image validation failed: file too large ({} bytes, maximum allowed: {} bytes)",
            file_size,
            config.max_file_size
        ));
    }

    let file = File::open(image_path)?;
    let mut reader = BufReader::new(file);
    let mut header = vec![0u8; FORMAT_SNIFF_BYTES];
    let bytes_read = reader.read(&mut header)?;
    header.truncate(bytes_read);

    let format = image::guess_format(&header).map_err(|e| {
        anyhow::anyhow!(
            "Image validation failed: unrecognized image format ({}) - {}",
            image_path,
            e
        )
    })?;
    debug!("Detected {:?} format for {}", format, image_path);

    Ok(())
}

/// The Tesseract engine entry point; acquisition produces a ready handle
pub struct TesseractEngine;

impl TesseractEngine {
    /// Acquire a ready recognition handle, or fail explicitly
    ///
    /// Initialization cost is paid here, once; the returned handle can run
    /// any number of recognitions and releases its Tesseract instance when
    /// dropped, on success and error paths alike.
    pub fn acquire(config: &EngineConfig) -> AppResult<EngineHandle> {
        config.validate()?;

        info!(
            "Acquiring Tesseract engine for languages: {}",
            config.languages
        );
        let tess = LepTess::new(config.tessdata_path.as_deref(), &config.languages).map_err(
            |e| AppError::Recognition(format!("Failed to initialize Tesseract: {}", e)),
        )?;

        Ok(EngineHandle {
            tess,
            config: config.clone(),
        })
    }
}

/// A ready, scoped recognition handle owning one Tesseract instance
pub struct EngineHandle {
    tess: LepTess,
    config: EngineConfig,
}

impl RecognitionEngine for EngineHandle {
    fn recognize(&mut self, image_path: &str) -> AppResult<RecognitionOutput> {
        validate_image_path(image_path, &self.config)
            .map_err(|e| AppError::Recognition(e.to_string()))?;

        self.tess.set_image(image_path).map_err(|e| {
            AppError::Recognition(format!("Failed to load image for OCR: {}", e))
        })?;

        let text = self.tess.get_utf8_text().map_err(|e| {
            AppError::Recognition(format!("Text extraction failed: {}", e))
        })?;

        // Tesseract reports mean word confidence on a 0-100 scale
        let confidence = self.tess.mean_text_conf().clamp(0, 100) as f32;

        info!(
            "Recognized {} chars from {} (confidence {})",
            text.len(),
            image_path,
            confidence
        );
        Ok(RecognitionOutput { text, confidence })
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        // LepTess frees its native resources on drop; this is the release
        // half of the acquire/release pair
        debug!(
            "Releasing Tesseract engine for languages: {}",
            self.config.languages
        );
    }
}
