// ABOUTME: Local goal store over the device key-value seam
// ABOUTME: Whole-list persistence with locally assigned goal identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::GoalStore;
use crate::constants::storage_keys;
use crate::errors::AppResult;
use crate::models::Goal;
use crate::storage::{self, KeyValueStore};
use tokio::sync::watch;
use uuid::Uuid;

/// Goal store backed by the device-local key-value store.
///
/// The whole list is rewritten under a fixed key on every mutation, the same
/// persistence shape as presets. Ids are assigned locally at creation so the
/// two deployment modes share one goal model.
pub struct LocalGoalStore<S: KeyValueStore> {
    store: S,
    key: &'static str,
    tx: watch::Sender<Vec<Goal>>,
}

impl<S: KeyValueStore> LocalGoalStore<S> {
    /// Open the store, seeding the subscription channel with the persisted
    /// list (absent or corrupt data seeds as empty).
    pub async fn new(store: S) -> Self {
        let key = storage_keys::GOALS;
        let initial: Vec<Goal> = storage::read_json(&store, key).await.unwrap_or_default();
        let (tx, _rx) = watch::channel(initial);
        Self { store, key, tx }
    }

    async fn persist(&self, goals: &[Goal]) -> AppResult<()> {
        storage::write_json(&self.store, self.key, &goals).await?;
        self.tx.send_replace(goals.to_vec());
        Ok(())
    }
}

#[async_trait::async_trait]
impl<S: KeyValueStore> GoalStore for LocalGoalStore<S> {
    async fn list(&self) -> AppResult<Vec<Goal>> {
        Ok(storage::read_json(&self.store, self.key)
            .await
            .unwrap_or_default())
    }

    async fn add(&self, title: &str) -> AppResult<Goal> {
        let title = Goal::validate_title(title)?;
        let goal = Goal {
            id: Uuid::new_v4().to_string(),
            title,
        };

        let mut goals = self.list().await?;
        goals.push(goal.clone());
        self.persist(&goals).await?;
        Ok(goal)
    }

    async fn remove(&self, id: &str) -> AppResult<()> {
        let mut goals = self.list().await?;
        let before = goals.len();
        goals.retain(|g| g.id != id);
        if goals.len() != before {
            self.persist(&goals).await?;
        }
        Ok(())
    }

    async fn subscribe(&self) -> AppResult<watch::Receiver<Vec<Goal>>> {
        Ok(self.tx.subscribe())
    }
}
