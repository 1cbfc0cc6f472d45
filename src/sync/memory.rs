// ABOUTME: In-memory document store implementing the remote sync seam
// ABOUTME: Per-user collections behind watch publishers, used by tests and local development
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::DocumentClient;
use crate::errors::AppResult;
use crate::models::Goal;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{watch, RwLock};
use uuid::Uuid;

/// One user's collection plus its publisher. The sender is kept alive here
/// so receivers stay subscribed for as long as the store exists.
struct UserCollection {
    goals: Vec<Goal>,
    tx: watch::Sender<Vec<Goal>>,
}

impl UserCollection {
    fn new() -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        Self {
            goals: Vec::new(),
            tx,
        }
    }

    fn publish(&self) {
        // send_replace delivers even with no receivers attached yet
        self.tx.send_replace(self.goals.clone());
    }
}

impl Default for UserCollection {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory stand-in for the remote document service.
///
/// Clones share state, so two clients cloned from the same store see each
/// other's writes through their subscriptions, the same observable behavior
/// as two devices attached to one remote collection.
#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
    collections: Arc<RwLock<HashMap<Uuid, UserCollection>>>,
}

impl InMemoryDocumentStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DocumentClient for InMemoryDocumentStore {
    async fn create(&self, user_id: Uuid, title: &str) -> AppResult<Goal> {
        let goal = Goal {
            id: Uuid::new_v4().to_string(),
            title: title.to_owned(),
        };

        let mut collections = self.collections.write().await;
        let collection = collections.entry(user_id).or_default();
        collection.goals.push(goal.clone());
        collection.publish();
        tracing::debug!(%user_id, goal_id = %goal.id, "goal document created");
        Ok(goal)
    }

    async fn delete(&self, user_id: Uuid, goal_id: &str) -> AppResult<()> {
        let mut collections = self.collections.write().await;
        if let Some(collection) = collections.get_mut(&user_id) {
            let before = collection.goals.len();
            collection.goals.retain(|g| g.id != goal_id);
            if collection.goals.len() != before {
                collection.publish();
                tracing::debug!(%user_id, goal_id, "goal document deleted");
            }
        }
        Ok(())
    }

    async fn subscribe(&self, user_id: Uuid) -> AppResult<watch::Receiver<Vec<Goal>>> {
        let mut collections = self.collections.write().await;
        let collection = collections.entry(user_id).or_default();
        Ok(collection.tx.subscribe())
    }
}
