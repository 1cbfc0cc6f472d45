// ABOUTME: File-backed key-value store implementation
// ABOUTME: Persists one JSON document per key with atomic tmp-file replacement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::KeyValueStore;
use crate::errors::{AppError, AppResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-backed key-value store rooted at a data directory.
///
/// Each key maps to `<root>/<key>.json`. Writes go through a temporary file
/// followed by a rename so a crash mid-write leaves the previous value
/// intact rather than a truncated record.
#[derive(Clone, Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StorageWrite` when the directory cannot be created.
    pub async fn new(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await.map_err(|err| {
            AppError::storage_write(format!("creating data dir {}: {err}", root.display()))
        })?;
        Ok(Self { root })
    }

    /// Directory the store writes into
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys come from constants::storage_keys and are plain identifiers;
        // refuse anything that could escape the data directory.
        debug_assert!(
            key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
            "storage key must be a plain identifier"
        );
        self.root.join(format!("{key}.json"))
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path).await {
            Ok(raw) => Some(raw),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(key, error = %err, "treating unreadable value as absent");
                None
            }
        }
    }

    async fn set(&self, key: &str, value: String) -> AppResult<()> {
        let path = self.path_for(key);
        let tmp = self.root.join(format!("{key}.json.tmp"));

        fs::write(&tmp, value.as_bytes())
            .await
            .map_err(|err| AppError::storage_write(format!("writing {key}: {err}")))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|err| AppError::storage_write(format!("replacing {key}: {err}")))?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(AppError::storage_write(format!("removing {key}: {err}"))),
        }
    }
}
