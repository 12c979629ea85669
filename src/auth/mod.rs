// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Per-user API key issuance and validation

pub mod credential_store;

pub use credential_store::{generate_api_key, AuthError, CredentialStore, API_KEY_BYTES, API_KEY_LEN};
