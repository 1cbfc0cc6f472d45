// ABOUTME: Remote document-collection seam for the third-party sync service
// ABOUTME: Per-user goal documents with push-driven whole-collection updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Remote Document Sync
//!
//! The synced deployment mode stores each goal as a document in a per-user
//! remote collection. The service is a black box behind [`DocumentClient`]:
//! create, delete-by-id, and a live subscription over the whole collection.
//!
//! Pushes are modeled as a [`watch`] channel carrying whole-collection
//! snapshots. A receiver always observes the latest value and consumers
//! replace their in-memory list with it; last message wins, nothing is
//! merged. Dropping the receiver tears the subscription down, which is what
//! happens when the owning screen unmounts.

/// In-memory reference backend
pub mod memory;

use crate::errors::AppResult;
use crate::models::Goal;
use tokio::sync::watch;
use uuid::Uuid;

/// Client for the remote per-user goal collection.
///
/// Implementations map their transport failures to
/// [`crate::errors::ErrorCode::RemoteOperationFailed`]; no retry is
/// attempted at this layer, and a failed mutation must leave the published
/// collection unchanged.
#[async_trait::async_trait]
pub trait DocumentClient: Send + Sync {
    /// Create a goal document in `user_id`'s collection; the service assigns
    /// the identifier.
    ///
    /// # Errors
    ///
    /// Returns `RemoteOperationFailed` when the create does not reach the
    /// service.
    async fn create(&self, user_id: Uuid, title: &str) -> AppResult<Goal>;

    /// Delete the document `goal_id` from `user_id`'s collection.
    ///
    /// # Errors
    ///
    /// Returns `RemoteOperationFailed` when the delete does not reach the
    /// service; the collection is left unchanged.
    async fn delete(&self, user_id: Uuid, goal_id: &str) -> AppResult<()>;

    /// Subscribe to `user_id`'s collection. The receiver holds the current
    /// collection immediately and is updated on every remote change, from
    /// this client or any other.
    ///
    /// # Errors
    ///
    /// Returns `RemoteOperationFailed` when the subscription cannot be
    /// established.
    async fn subscribe(&self, user_id: Uuid) -> AppResult<watch::Receiver<Vec<Goal>>>;
}
