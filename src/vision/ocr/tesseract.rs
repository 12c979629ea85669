// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tesseract engine
//!
//! Drives the `tesseract` executable through `rusty-tesseract`. The
//! preprocessed image is written to a temporary PNG which Tesseract reads.

use image::{GrayImage, ImageFormat};
use rusty_tesseract::{Args, Image};
use tracing::{debug, info};

use super::engine::{OcrError, OcrMethod, TextRecognizer};

/// Default Tesseract language pack
pub const DEFAULT_LANGUAGE: &str = "eng";

pub struct TesseractRecognizer {
    args: Args,
}

impl TesseractRecognizer {
    /// Create a recognizer for `language`
    ///
    /// Fails if the `tesseract` executable cannot be found.
    pub fn new(language: &str) -> Result<Self, OcrError> {
        let version = rusty_tesseract::get_tesseract_version().map_err(|e| OcrError::EngineInit {
            method: OcrMethod::Tesseract,
            message: format!("{:?}", e),
        })?;
        info!(
            "Tesseract available ({}), language: {}",
            version.lines().next().unwrap_or("unknown version"),
            language
        );

        Ok(Self {
            args: Args {
                lang: language.to_string(),
                ..Default::default()
            },
        })
    }

    pub fn language(&self) -> &str {
        &self.args.lang
    }

    fn failed(message: impl ToString) -> OcrError {
        OcrError::RecognitionFailed {
            method: OcrMethod::Tesseract,
            message: message.to_string(),
        }
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn method(&self) -> OcrMethod {
        OcrMethod::Tesseract
    }

    fn recognize(&self, image: &GrayImage) -> Result<String, OcrError> {
        let file = tempfile::Builder::new()
            .prefix("ocr-")
            .suffix(".png")
            .tempfile()
            .map_err(Self::failed)?;

        image
            .save_with_format(file.path(), ImageFormat::Png)
            .map_err(Self::failed)?;

        let tess_image = Image::from_path(file.path()).map_err(|e| Self::failed(format!("{:?}", e)))?;
        let text = rusty_tesseract::image_to_string(&tess_image, &self.args)
            .map_err(|e| Self::failed(format!("{:?}", e)))?;

        debug!(
            "Tesseract recognized {} chars from {}x{} image",
            text.len(),
            image.width(),
            image.height()
        );

        Ok(text)
    }
}

impl std::fmt::Debug for TesseractRecognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TesseractRecognizer")
            .field("language", &self.args.lang)
            .finish_non_exhaustive()
    }
}
