// ABOUTME: Key-value storage abstraction for device-local persistence
// ABOUTME: Pluggable backend support (in-memory, file) with fail-open JSON helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Key-Value Storage
//!
//! The device-local key-value store is the one durable collaborator every
//! local store shares. It is modeled as the [`KeyValueStore`] trait so the
//! preset, snapshot, goal, and measurement stores stay backend-agnostic:
//! tests run against [`memory::MemoryStore`], devices use [`file::FileStore`].
//!
//! Reads fail open: a missing, unreadable, or undecodable value is treated
//! as absent and logged at `warn`, never raised to the caller. Writes do
//! surface errors, since losing a mutation silently would be worse than
//! telling the screen about it.

/// File-backed implementation, one JSON document per key
pub mod file;
/// In-memory implementation for tests and ephemeral state
pub mod memory;

use crate::errors::AppResult;
use serde::{de::DeserializeOwned, Serialize};

/// Device-local key-value store seam.
///
/// Values are serialized structured records; keys come from
/// [`crate::constants::storage_keys`]. Every mutation is a whole-value
/// overwrite; no incremental diffing, last write wins.
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the raw value stored under `key`, if any.
    ///
    /// Implementations must return `None` rather than an error when the
    /// underlying storage is unreadable.
    async fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageWrite` when the value cannot be persisted.
    async fn set(&self, key: &str, value: String) -> AppResult<()>;

    /// Remove the value stored under `key`. Removing an absent key is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns `StorageWrite` when the removal cannot be persisted.
    async fn remove(&self, key: &str) -> AppResult<()>;
}

/// Decode the JSON record under `key`, treating malformed data as absent.
pub async fn read_json<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = store.get(key).await?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(key, error = %err, "discarding undecodable stored value");
            None
        }
    }
}

/// Serialize `value` and store it under `key`.
///
/// # Errors
///
/// Returns `Serialization` when encoding fails or `StorageWrite` when the
/// backend rejects the write.
pub async fn write_json<T, S>(store: &S, key: &str, value: &T) -> AppResult<()>
where
    T: Serialize + Sync,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, raw).await
}
