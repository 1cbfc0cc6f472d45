// ABOUTME: Synced goal store over the remote document-collection seam
// ABOUTME: Gates every operation on the injected user context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::GoalStore;
use crate::context::UserContext;
use crate::errors::AppResult;
use crate::models::Goal;
use crate::sync::DocumentClient;
use tokio::sync::{watch, Mutex};

/// Goal store backed by the remote per-user document collection.
///
/// Every operation resolves the signed-in user from the injected
/// [`UserContext`] first; with no user nothing is sent and the caller gets
/// `AuthRequired`. Remote failures propagate as `RemoteOperationFailed`
/// without touching the published collection, and nothing is retried here.
///
/// The store opens at most one transport subscription; reads and
/// [`GoalStore::subscribe`] hand out clones of the same receiver.
pub struct RemoteGoalStore<C: DocumentClient> {
    client: C,
    context: UserContext,
    subscription: Mutex<Option<watch::Receiver<Vec<Goal>>>>,
}

impl<C: DocumentClient> RemoteGoalStore<C> {
    /// Create a synced store for the given identity
    pub fn new(client: C, context: UserContext) -> Self {
        Self {
            client,
            context,
            subscription: Mutex::new(None),
        }
    }

    /// The identity this store operates as
    #[must_use]
    pub fn context(&self) -> UserContext {
        self.context
    }

    /// Clone the cached receiver, establishing the subscription on first use
    async fn receiver(&self) -> AppResult<watch::Receiver<Vec<Goal>>> {
        let user_id = self.context.require_user()?;
        let mut cached = self.subscription.lock().await;
        if let Some(rx) = cached.as_ref() {
            return Ok(rx.clone());
        }
        let rx = self.client.subscribe(user_id).await?;
        *cached = Some(rx.clone());
        Ok(rx)
    }
}

#[async_trait::async_trait]
impl<C: DocumentClient> GoalStore for RemoteGoalStore<C> {
    async fn list(&self) -> AppResult<Vec<Goal>> {
        let rx = self.receiver().await?;
        let goals = rx.borrow().clone();
        Ok(goals)
    }

    async fn add(&self, title: &str) -> AppResult<Goal> {
        let title = Goal::validate_title(title)?;
        let user_id = self.context.require_user()?;
        self.client.create(user_id, &title).await
    }

    async fn remove(&self, id: &str) -> AppResult<()> {
        let user_id = self.context.require_user()?;
        self.client.delete(user_id, id).await
    }

    async fn subscribe(&self) -> AppResult<watch::Receiver<Vec<Goal>>> {
        self.receiver().await
    }
}
