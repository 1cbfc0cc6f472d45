// ABOUTME: Local workout preset store over the device key-value seam
// ABOUTME: Whole-collection persistence with stable preset identities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Local Preset Store
//!
//! Persists the user's workout presets as a single serialized collection
//! under a fixed key. Every mutation validates its input, rewrites the whole
//! collection, and persists it. There is no incremental diffing and no
//! reordering. Presets are addressed by their stable id, so removing one
//! never shifts the identity of another.

use crate::constants::storage_keys;
use crate::errors::{AppError, AppResult};
use crate::models::{PresetDraft, WorkoutPreset};
use crate::storage::{self, KeyValueStore};
use uuid::Uuid;

/// Store for the user-defined workout preset collection
pub struct PresetStore<S: KeyValueStore> {
    store: S,
    key: &'static str,
}

impl<S: KeyValueStore> PresetStore<S> {
    /// Create a preset store over the given backend
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: storage_keys::PRESETS,
        }
    }

    /// Load the persisted collection; absent or corrupt data loads as empty
    pub async fn load(&self) -> Vec<WorkoutPreset> {
        storage::read_json(&self.store, self.key)
            .await
            .unwrap_or_default()
    }

    /// Overwrite the persisted collection.
    ///
    /// # Errors
    ///
    /// Returns `StorageWrite`/`Serialization` when persisting fails.
    pub async fn save(&self, presets: &[WorkoutPreset]) -> AppResult<()> {
        storage::write_json(&self.store, self.key, &presets).await
    }

    /// Validate `draft`, append it as a new preset, and persist.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when a required field is empty after
    /// trimming; the collection is left unchanged.
    pub async fn add(&self, draft: PresetDraft) -> AppResult<WorkoutPreset> {
        let preset = draft.into_preset()?;
        let mut presets = self.load().await;
        presets.push(preset.clone());
        self.save(&presets).await?;
        tracing::debug!(preset_id = %preset.id, "preset added");
        Ok(preset)
    }

    /// Validate `draft` and replace the preset with identity `id` in place.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` on validation failure or
    /// `InvalidInput` when no preset has that id; either way the collection
    /// is left unchanged.
    pub async fn update(&self, id: Uuid, draft: PresetDraft) -> AppResult<WorkoutPreset> {
        let preset = draft.into_preset_with_id(id)?;
        let mut presets = self.load().await;
        let slot = presets
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::invalid_input(format!("no preset with id {id}")))?;
        *slot = preset.clone();
        self.save(&presets).await?;
        Ok(preset)
    }

    /// Remove the preset with identity `id` and persist. Removing an
    /// unknown id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StorageWrite`/`Serialization` when persisting fails.
    pub async fn remove(&self, id: Uuid) -> AppResult<()> {
        let mut presets = self.load().await;
        let before = presets.len();
        presets.retain(|p| p.id != id);
        if presets.len() != before {
            self.save(&presets).await?;
            tracing::debug!(preset_id = %id, "preset removed");
        }
        Ok(())
    }
}
