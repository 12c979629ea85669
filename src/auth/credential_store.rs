// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! API Key Storage
//!
//! Holds at most one API key per user id. Issuing a key for a user replaces
//! any key issued before it.
//!
//! **Security**: Keys are stored in plaintext, in memory only, and never
//! persisted to disk. They do not expire and cannot be revoked.

use rand::{rngs::OsRng, RngCore};
use std::collections::HashMap;
use std::sync::Arc;
use subtle::ConstantTimeEq;
use thiserror::Error;
use tokio::sync::RwLock;

/// Number of random bytes behind each key (128 bits)
pub const API_KEY_BYTES: usize = 16;

/// Length of a hex-encoded key
pub const API_KEY_LEN: usize = API_KEY_BYTES * 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("user id must not be empty")]
    EmptyUserId,
}

/// Generate a fresh hex-encoded API key from the OS random source
pub fn generate_api_key() -> String {
    let mut bytes = [0u8; API_KEY_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// In-memory mapping from user id to issued API key
///
/// Cheap to clone; clones share the same underlying map.
///
/// # Example
///
/// ```ignore
/// let store = CredentialStore::new();
/// let key = store.issue("alice").await?;
/// assert!(store.validate("alice", &key).await);
/// ```
#[derive(Clone, Default)]
pub struct CredentialStore {
    keys: Arc<RwLock<HashMap<String, String>>>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new key for `user_id`, replacing any previous one
    pub async fn issue(&self, user_id: &str) -> Result<String, AuthError> {
        if user_id.is_empty() {
            return Err(AuthError::EmptyUserId);
        }

        let api_key = generate_api_key();
        let mut keys = self.keys.write().await;
        let replaced = keys.insert(user_id.to_string(), api_key.clone()).is_some();
        tracing::info!(
            user_id = %user_id,
            replaced,
            total_users = keys.len(),
            "API key issued"
        );

        Ok(api_key)
    }

    /// Check `api_key` against the key on record for `user_id`
    ///
    /// Returns `false` when the user has no key. Comparison runs in
    /// constant time for keys of equal length.
    pub async fn validate(&self, user_id: &str, api_key: &str) -> bool {
        let keys = self.keys.read().await;
        match keys.get(user_id) {
            Some(stored) => stored.as_bytes().ct_eq(api_key.as_bytes()).into(),
            None => false,
        }
    }

    /// Number of users currently holding a key
    pub async fn count(&self) -> usize {
        self.keys.read().await.len()
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore").finish_non_exhaustive()
    }
}
