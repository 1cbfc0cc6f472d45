// ABOUTME: Core data models for the mobile fitness core
// ABOUTME: Defines WorkoutPreset, DailySnapshot, Goal, Measurement and their validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Serializable domain types shared by the stores. All user-entered fields
//! are free text at the boundary (the mobile keyboard hints at numbers but
//! nothing enforces them); validation is limited to non-empty-after-trim on
//! required fields.
//!
//! Presets carry a stable [`Uuid`] assigned at creation. The persisted
//! snapshot references completed workouts by that id rather than by list
//! position, so deleting a preset can never silently re-point a completion
//! mark at a neighbor.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Trim a required field, rejecting empty values
pub(crate) fn required_trimmed(field: &'static str, value: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::missing_field(field));
    }
    Ok(trimmed.to_owned())
}

/// A reusable workout template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPreset {
    /// Stable identity, assigned at creation
    pub id: Uuid,
    /// Exercise name
    pub name: String,
    /// Set count, free text
    pub sets: String,
    /// Rep target, free text
    pub reps: String,
    /// Working weight, free text, optional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

/// Unvalidated preset input as entered on the Workouts screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetDraft {
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub weight: Option<String>,
}

impl PresetDraft {
    /// Build a draft from raw field values
    pub fn new(
        name: impl Into<String>,
        sets: impl Into<String>,
        reps: impl Into<String>,
        weight: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            sets: sets.into(),
            reps: reps.into(),
            weight: weight.map(str::to_owned),
        }
    }

    /// Validate the draft and mint a preset with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when `name`, `sets`, or `reps` is
    /// empty after trimming. `weight` is optional; a blank weight becomes
    /// `None`.
    pub fn into_preset(self) -> AppResult<WorkoutPreset> {
        self.into_preset_with_id(Uuid::new_v4())
    }

    /// Validate the draft, keeping an existing identity (edit-in-place)
    ///
    /// # Errors
    ///
    /// Same validation rules as [`Self::into_preset`].
    pub fn into_preset_with_id(self, id: Uuid) -> AppResult<WorkoutPreset> {
        let name = required_trimmed("name", &self.name)?;
        let sets = required_trimmed("sets", &self.sets)?;
        let reps = required_trimmed("reps", &self.reps)?;
        let weight = self
            .weight
            .as_deref()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_owned);

        Ok(WorkoutPreset {
            id,
            name,
            sets,
            reps,
            weight,
        })
    }
}

/// The set of presets chosen for "today" plus completion marks.
///
/// Exactly one snapshot is persisted at a time; it is wholly replaced on
/// every commit and discarded when its date stamp no longer matches the
/// current calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySnapshot {
    /// Calendar-day stamp the snapshot belongs to
    pub date: NaiveDate,
    /// Workouts selected for the day
    pub workouts: Vec<WorkoutPreset>,
    /// Ids of completed workouts; always a subset of `workouts`
    pub completed: BTreeSet<Uuid>,
}

impl DailySnapshot {
    /// An empty snapshot for the given day
    #[must_use]
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            workouts: Vec::new(),
            completed: BTreeSet::new(),
        }
    }

    /// Build a snapshot, dropping completion marks that reference no
    /// selected workout
    #[must_use]
    pub fn new(date: NaiveDate, workouts: Vec<WorkoutPreset>, completed: BTreeSet<Uuid>) -> Self {
        let mut snapshot = Self {
            date,
            workouts,
            completed,
        };
        snapshot.normalize();
        snapshot
    }

    /// Re-establish the `completed ⊆ workouts` invariant
    pub fn normalize(&mut self) {
        let ids: BTreeSet<Uuid> = self.workouts.iter().map(|w| w.id).collect();
        self.completed.retain(|id| ids.contains(id));
    }

    /// Whether the snapshot holds no selections at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty() && self.completed.is_empty()
    }
}

/// A free-text user-authored fitness objective
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Stable identity; assigned locally or by the remote document store
    pub id: String,
    /// Goal text
    pub title: String,
}

impl Goal {
    /// Validate a title for a new goal
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when the title is empty after trimming.
    pub fn validate_title(title: &str) -> AppResult<String> {
        required_trimmed("title", title)
    }
}

/// A timestamped body metric under a named category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    /// Category, e.g. "Bodyweight"
    pub title: String,
    /// Recorded value, free text, e.g. "152 lbs"
    pub value: String,
    /// Calendar day the entry was recorded
    pub recorded_at: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_preset_draft_validation() {
        let preset = PresetDraft::new("Squat", "3", "10", Some("135"))
            .into_preset()
            .unwrap();
        assert_eq!(preset.name, "Squat");
        assert_eq!(preset.weight.as_deref(), Some("135"));

        let err = PresetDraft::new("  ", "3", "10", None)
            .into_preset()
            .unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::MissingRequiredField);
    }

    #[test]
    fn test_preset_draft_blank_weight_is_none() {
        let preset = PresetDraft::new("Row", "5", "5", Some("  "))
            .into_preset()
            .unwrap();
        assert_eq!(preset.weight, None);
    }

    #[test]
    fn test_snapshot_normalization_drops_unknown_ids() {
        let p1 = PresetDraft::new("Squat", "3", "10", None)
            .into_preset()
            .unwrap();
        let stray = Uuid::new_v4();
        let completed: BTreeSet<Uuid> = [p1.id, stray].into_iter().collect();
        let snapshot = DailySnapshot::new(date("2024-01-01"), vec![p1.clone()], completed);
        assert_eq!(snapshot.completed.len(), 1);
        assert!(snapshot.completed.contains(&p1.id));
    }

    #[test]
    fn test_goal_title_trimmed() {
        assert_eq!(Goal::validate_title("  run more  ").unwrap(), "run more");
        assert!(Goal::validate_title("   ").is_err());
    }
}
