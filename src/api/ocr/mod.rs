// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OCR API endpoint module
//!
//! Provides POST /ocr_process for extracting text from an uploaded image.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::ocr_process_handler;
pub use request::OcrUpload;
pub use response::OcrProcessResponse;
