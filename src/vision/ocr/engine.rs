// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OCR engine selection and the common recognizer interface

use image::GrayImage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised by OCR engines
#[derive(Debug, Error)]
pub enum OcrError {
    #[error("Unsupported OCR method '{0}', supported: tesseract, ocrs")]
    UnsupportedMethod(String),

    #[error("OCR engine '{0}' is not loaded")]
    EngineUnavailable(OcrMethod),

    #[error("Failed to initialize {method} engine: {message}")]
    EngineInit { method: OcrMethod, message: String },

    #[error("{method} recognition failed: {message}")]
    RecognitionFailed { method: OcrMethod, message: String },
}

/// Available OCR engines
///
/// - `Tesseract`: whole-image text extraction via the Tesseract CLI
/// - `Ocrs`: word detection + line recognition, lines joined with a space.
///   Also accepted under the name `easyocr`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OcrMethod {
    #[default]
    Tesseract,
    Ocrs,
}

impl OcrMethod {
    pub const ALL: [OcrMethod; 2] = [OcrMethod::Tesseract, OcrMethod::Ocrs];

    pub fn as_str(&self) -> &'static str {
        match self {
            OcrMethod::Tesseract => "tesseract",
            OcrMethod::Ocrs => "ocrs",
        }
    }
}

impl fmt::Display for OcrMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OcrMethod {
    type Err = OcrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tesseract" => Ok(OcrMethod::Tesseract),
            "ocrs" | "easyocr" => Ok(OcrMethod::Ocrs),
            _ => Err(OcrError::UnsupportedMethod(s.to_string())),
        }
    }
}

/// Common interface over OCR engines
///
/// Implementations receive an already preprocessed grayscale image and
/// return the recognized text. They must be safe to share across request
/// threads.
#[cfg_attr(test, mockall::automock)]
pub trait TextRecognizer: Send + Sync {
    /// Engine this recognizer implements
    fn method(&self) -> OcrMethod;

    /// Extract text from a preprocessed image
    fn recognize(&self, image: &GrayImage) -> Result<String, OcrError>;
}
