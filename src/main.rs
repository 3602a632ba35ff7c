//! # Label-Lens CLI
//!
//! Scans a photographed ingredient label (or raw text, for development) and
//! prints the structured safety assessment as JSON.
//!
//! ```text
//! label-lens photo.jpg
//! label-lens --text "Ingredients: Water, Sugar, Red Dye 40"
//! ```

use tracing::error;
use tracing_subscriber::EnvFilter;

use label_lens::engine::{EngineConfig, TesseractEngine};
use label_lens::pipeline::LabelScanner;
use label_lens::recognition::RecognitionEngine;
use label_lens::{AppResult, ScanResult};

fn run() -> AppResult<ScanResult> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let scanner = LabelScanner::new();

    match args.as_slice() {
        [flag, text] if flag.as_str() == "--text" => {
            // Development path: no engine involved, assume perfect recognition
            scanner.scan(text, 100.0)
        }
        [image_path] => {
            let config = EngineConfig::from_env();
            let mut handle = TesseractEngine::acquire(&config)?;
            let output = handle.recognize(image_path)?;
            scanner.scan_recognized(&output)
        }
        _ => Err(label_lens::AppError::Config(
            "usage: label-lens <image-path> | label-lens --text <label-text>".to_string(),
        )),
    }
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(result) => match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize scan result: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Scan failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
