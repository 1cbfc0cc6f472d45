// ABOUTME: Goal store abstraction with local and synced backends
// ABOUTME: One polymorphic trait, selected at composition time per deployment mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Goal Store
//!
//! Free-text fitness goals live either in the device-local key-value store
//! or in a remote per-user document collection, depending on deployment
//! mode. Both modes sit behind the single [`GoalStore`] trait so the Home
//! screen has one call site; the backend is chosen where the app is
//! composed.
//!
//! Both backends expose the same subscription shape: a [`watch`] receiver
//! carrying whole-collection snapshots, replaced on every change. Consumers
//! overwrite their in-memory list with each delivery and never merge.

/// Local key-value backend
pub mod local;
/// Remote document-collection backend
pub mod remote;

pub use local::LocalGoalStore;
pub use remote::RemoteGoalStore;

use crate::errors::AppResult;
use crate::models::Goal;
use tokio::sync::watch;

/// Store for the user's goal list, independent of deployment mode
#[async_trait::async_trait]
pub trait GoalStore: Send + Sync {
    /// Current goal list.
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` in synced mode with no signed-in user or
    /// `RemoteOperationFailed` when the backend cannot be reached. Local
    /// read problems never surface; the list loads as empty.
    async fn list(&self) -> AppResult<Vec<Goal>>;

    /// Validate `title` and create a goal.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for an empty-after-trim title,
    /// `AuthRequired`/`RemoteOperationFailed` per backend. A failed create
    /// leaves the stored list unchanged.
    async fn add(&self, title: &str) -> AppResult<Goal>;

    /// Delete the goal with the given stable identifier. Unknown ids are a
    /// no-op. Any confirmation step before a delete is a screen concern, not
    /// a store concern.
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired`/`RemoteOperationFailed` per backend; on
    /// failure the stored list is unchanged.
    async fn remove(&self, id: &str) -> AppResult<()>;

    /// Subscribe to whole-list snapshots. The receiver observes the latest
    /// list immediately and after every mutation; dropping it ends the
    /// subscription.
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired`/`RemoteOperationFailed` per backend.
    async fn subscribe(&self) -> AppResult<watch::Receiver<Vec<Goal>>>;
}
