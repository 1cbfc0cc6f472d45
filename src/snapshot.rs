// ABOUTME: Daily workout snapshot store with calendar-day reconciliation
// ABOUTME: Restores today's selections on activation and resets on day rollover
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Daily Snapshot Reconciler
//!
//! On each app activation the Home screen asks this store to reconcile the
//! persisted "today" record against the current calendar day. A matching
//! date restores the selected workouts and completion marks unchanged; a
//! stale date clears the record and hands back an empty snapshot. The stale
//! case is the expected daily-reset transition, not an error.
//!
//! One record exists at a time. `commit` replaces it wholly (there is no
//! partial-update path) and `reconcile` after a same-day `commit` returns
//! exactly what was committed.

use crate::constants::storage_keys;
use crate::errors::AppResult;
use crate::models::{DailySnapshot, WorkoutPreset};
use crate::storage::{self, KeyValueStore};
use chrono::NaiveDate;
use std::collections::BTreeSet;
use uuid::Uuid;

/// Store for the single persisted daily workout snapshot
pub struct SnapshotStore<S: KeyValueStore> {
    store: S,
    key: &'static str,
}

impl<S: KeyValueStore> SnapshotStore<S> {
    /// Create a snapshot store over the given backend
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: storage_keys::DAILY_SNAPSHOT,
        }
    }

    /// Reconcile the persisted snapshot against `today`.
    ///
    /// Absent or undecodable state yields an empty snapshot. A stored
    /// snapshot whose date matches `today` is returned unchanged; repeated
    /// calls with no intervening commit keep returning the same value. A
    /// date mismatch clears the persisted record and yields an empty
    /// snapshot for `today`.
    ///
    /// Reconciliation never fails: storage problems on either side degrade
    /// to the empty state, with a log entry. The stale record is retried on
    /// the next activation if clearing it did not stick.
    pub async fn reconcile(&self, today: NaiveDate) -> DailySnapshot {
        let Some(mut stored) = storage::read_json::<DailySnapshot, _>(&self.store, self.key).await
        else {
            return DailySnapshot::empty(today);
        };

        if stored.date != today {
            tracing::info!(stored = %stored.date, %today, "clearing stale daily snapshot");
            if let Err(err) = self.store.remove(self.key).await {
                tracing::warn!(error = %err, "failed to clear stale snapshot");
            }
            return DailySnapshot::empty(today);
        }

        stored.normalize();
        stored
    }

    /// Replace the persisted snapshot with the given selections for `today`.
    ///
    /// Completion marks referencing no selected workout are dropped before
    /// persisting.
    ///
    /// # Errors
    ///
    /// Returns `StorageWrite`/`Serialization` when persisting fails.
    pub async fn commit(
        &self,
        workouts: Vec<WorkoutPreset>,
        completed: BTreeSet<Uuid>,
        today: NaiveDate,
    ) -> AppResult<DailySnapshot> {
        let snapshot = DailySnapshot::new(today, workouts, completed);
        storage::write_json(&self.store, self.key, &snapshot).await?;
        Ok(snapshot)
    }

    /// Discard the persisted snapshot, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageWrite` when the removal fails.
    pub async fn clear(&self) -> AppResult<()> {
        self.store.remove(self.key).await
    }
}
