// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OCR engines
//!
//! Components:
//! - `engine` - `OcrMethod` selection and the `TextRecognizer` trait
//! - `tesseract` - Tesseract CLI engine
//! - `ocrs_engine` - ocrs line-based engine

pub mod engine;
pub mod ocrs_engine;
pub mod tesseract;

pub use engine::{OcrError, OcrMethod, TextRecognizer};
pub use ocrs_engine::OcrsRecognizer;
pub use tesseract::TesseractRecognizer;
