// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! API key endpoint module
//!
//! Provides POST /generate_api_key.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::generate_api_key_handler;
pub use request::GenerateApiKeyRequest;
pub use response::GenerateApiKeyResponse;
