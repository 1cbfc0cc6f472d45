// ABOUTME: Body measurement log with persistence and title grouping
// ABOUTME: Groups entries by first-seen title for the Progress screen
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Measurement Log
//!
//! Timestamped body metrics entered on the Progress screen, e.g.
//! `("Bodyweight", "152 lbs")`. The screen renders them grouped by title:
//! groups appear in the order their title was first seen, entries within a
//! group in insertion order, so the sum of group sizes always equals the
//! number of entries added.
//!
//! The log persists under its own key, matching preset and snapshot
//! behavior. Absent or corrupt data loads as an empty log.

use crate::constants::storage_keys;
use crate::errors::AppResult;
use crate::models::{required_trimmed, Measurement};
use crate::storage::{self, KeyValueStore};
use chrono::NaiveDate;

/// Store for the body measurement log
pub struct MeasurementLog<S: KeyValueStore> {
    store: S,
    key: &'static str,
}

impl<S: KeyValueStore> MeasurementLog<S> {
    /// Create a measurement log over the given backend
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: storage_keys::MEASUREMENTS,
        }
    }

    /// Load all entries in insertion order
    pub async fn entries(&self) -> Vec<Measurement> {
        storage::read_json(&self.store, self.key)
            .await
            .unwrap_or_default()
    }

    /// Validate, stamp with `today`, append, and persist a new entry.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when title or value is empty after
    /// trimming; the log is left unchanged.
    pub async fn add(&self, title: &str, value: &str, today: NaiveDate) -> AppResult<Measurement> {
        let measurement = Measurement {
            title: required_trimmed("title", title)?,
            value: required_trimmed("value", value)?,
            recorded_at: today,
        };

        let mut entries = self.entries().await;
        entries.push(measurement.clone());
        storage::write_json(&self.store, self.key, &entries).await?;
        Ok(measurement)
    }

    /// Entries grouped by title, groups in first-seen-title order, each
    /// group in insertion order
    pub async fn group_by_title(&self) -> Vec<(String, Vec<Measurement>)> {
        let mut groups: Vec<(String, Vec<Measurement>)> = Vec::new();
        for entry in self.entries().await {
            match groups.iter_mut().find(|(title, _)| *title == entry.title) {
                Some((_, group)) => group.push(entry),
                None => groups.push((entry.title.clone(), vec![entry])),
            }
        }
        groups
    }
}
