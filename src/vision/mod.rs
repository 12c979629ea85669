// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Vision processing module for CPU-based text extraction
//!
//! This module provides:
//! - Image decoding from uploads and file paths
//! - Preprocessing (grayscale, blur, histogram equalization)
//! - OCR via Tesseract or ocrs
//! - The `ImagePipeline` tying these together

pub mod image_utils;
pub mod ocr;
pub mod pipeline;
pub mod preprocessing;

pub use image_utils::{decode_image_bytes, detect_format, load_image_path, ImageError, ImageInfo};
pub use ocr::{OcrError, OcrMethod, TextRecognizer};
pub use pipeline::{EngineInfo, ImagePipeline, PipelineConfig, PipelineError};
pub use preprocessing::preprocess;
