// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! ocrs engine
//!
//! Pure-Rust OCR running `.rten` detection and recognition models on CPU.
//! Text is recognized per detected line; line fragments are joined with a
//! single space in the order the engine returns them. Lines the engine
//! could not read and whitespace-only fragments are left out of the join.

use image::{DynamicImage, GrayImage};
use ocrs::{ImageSource, OcrEngine, OcrEngineParams};
use rten::Model;
use std::path::Path;
use tracing::{debug, info};

use super::engine::{OcrError, OcrMethod, TextRecognizer};

/// Expected model file names inside the model directory
pub const DETECTION_MODEL_FILE: &str = "text-detection.rten";
pub const RECOGNITION_MODEL_FILE: &str = "text-recognition.rten";

pub struct OcrsRecognizer {
    engine: OcrEngine,
}

impl OcrsRecognizer {
    /// Load detection and recognition models from `model_dir`
    pub fn from_model_dir<P: AsRef<Path>>(model_dir: P) -> Result<Self, OcrError> {
        let model_dir = model_dir.as_ref();
        let detection_path = model_dir.join(DETECTION_MODEL_FILE);
        let recognition_path = model_dir.join(RECOGNITION_MODEL_FILE);

        for path in [&detection_path, &recognition_path] {
            if !path.exists() {
                return Err(Self::init_failed(format!(
                    "model not found: {}",
                    path.display()
                )));
            }
        }

        info!("Loading ocrs models from {}", model_dir.display());

        let detection_model = Model::load_file(&detection_path)
            .map_err(|e| Self::init_failed(format!("detection model: {}", e)))?;
        let recognition_model = Model::load_file(&recognition_path)
            .map_err(|e| Self::init_failed(format!("recognition model: {}", e)))?;

        let engine = OcrEngine::new(OcrEngineParams {
            detection_model: Some(detection_model),
            recognition_model: Some(recognition_model),
            ..Default::default()
        })
        .map_err(|e| Self::init_failed(e.to_string()))?;

        Ok(Self { engine })
    }

    /// Recognize each detected text line, in engine order
    pub fn recognize_lines(&self, image: &GrayImage) -> Result<Vec<String>, OcrError> {
        let rgb = DynamicImage::ImageLuma8(image.clone()).to_rgb8();
        let source = ImageSource::from_bytes(rgb.as_raw(), rgb.dimensions())
            .map_err(|e| Self::failed(e.to_string()))?;

        let input = self
            .engine
            .prepare_input(source)
            .map_err(|e| Self::failed(e.to_string()))?;
        let word_rects = self
            .engine
            .detect_words(&input)
            .map_err(|e| Self::failed(e.to_string()))?;
        let line_rects = self.engine.find_text_lines(&input, &word_rects);
        let lines = self
            .engine
            .recognize_text(&input, &line_rects)
            .map_err(|e| Self::failed(e.to_string()))?;

        let fragments = non_blank(lines.into_iter().flatten().map(|line| line.to_string()));

        debug!(
            "ocrs detected {} words, recognized {} lines",
            word_rects.len(),
            fragments.len()
        );

        Ok(fragments)
    }

    fn init_failed(message: String) -> OcrError {
        OcrError::EngineInit {
            method: OcrMethod::Ocrs,
            message,
        }
    }

    fn failed(message: String) -> OcrError {
        OcrError::RecognitionFailed {
            method: OcrMethod::Ocrs,
            message,
        }
    }
}

impl TextRecognizer for OcrsRecognizer {
    fn method(&self) -> OcrMethod {
        OcrMethod::Ocrs
    }

    fn recognize(&self, image: &GrayImage) -> Result<String, OcrError> {
        Ok(join_fragments(self.recognize_lines(image)?))
    }
}

/// Drop whitespace-only fragments, keeping engine order
fn non_blank<I: IntoIterator<Item = String>>(fragments: I) -> Vec<String> {
    fragments
        .into_iter()
        .filter(|text| !text.trim().is_empty())
        .collect()
}

/// Join line fragments with a single space
pub fn join_fragments<I: IntoIterator<Item = String>>(fragments: I) -> String {
    non_blank(fragments).join(" ")
}

impl std::fmt::Debug for OcrsRecognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OcrsRecognizer").finish_non_exhaustive()
    }
}
