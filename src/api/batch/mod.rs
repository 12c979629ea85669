// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Batch OCR endpoint module
//!
//! Provides POST /batch_process for OCR over server-side image paths.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::batch_process_handler;
pub use request::BatchProcessRequest;
pub use response::BatchProcessResponse;
