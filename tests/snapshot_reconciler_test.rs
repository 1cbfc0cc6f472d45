// ABOUTME: Integration tests for daily snapshot reconciliation
// ABOUTME: Covers same-day restore, day-rollover reset, and fail-open reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod common;

use anyhow::Result;
use common::{bench_draft, day, memory_store, squat_draft};
use pierre_mobile_core::constants::storage_keys;
use pierre_mobile_core::snapshot::SnapshotStore;
use pierre_mobile_core::storage::KeyValueStore;
use std::collections::BTreeSet;
use uuid::Uuid;

#[tokio::test]
async fn test_reconcile_with_no_snapshot_returns_empty() -> Result<()> {
    let store = SnapshotStore::new(memory_store());
    let snapshot = store.reconcile(day("2024-01-01")).await;
    assert!(snapshot.is_empty());
    assert_eq!(snapshot.date, day("2024-01-01"));
    Ok(())
}

#[tokio::test]
async fn test_commit_then_reconcile_same_day_is_identity() -> Result<()> {
    let store = SnapshotStore::new(memory_store());
    let p1 = squat_draft().into_preset()?;
    let p2 = bench_draft().into_preset()?;
    let completed: BTreeSet<Uuid> = [p1.id].into_iter().collect();

    let committed = store
        .commit(vec![p1, p2], completed, day("2024-01-01"))
        .await?;
    let restored = store.reconcile(day("2024-01-01")).await;
    assert_eq!(restored, committed);

    // idempotent under repeated calls with no intervening commit
    let again = store.reconcile(day("2024-01-01")).await;
    assert_eq!(again, committed);
    Ok(())
}

#[tokio::test]
async fn test_reconcile_next_day_clears_stale_snapshot() -> Result<()> {
    let device = memory_store();
    let store = SnapshotStore::new(device.clone());
    let p1 = squat_draft().into_preset()?;
    let completed: BTreeSet<Uuid> = [p1.id].into_iter().collect();
    store
        .commit(vec![p1], completed, day("2024-01-01"))
        .await?;

    let rolled = store.reconcile(day("2024-01-02")).await;
    assert!(rolled.is_empty());
    assert_eq!(rolled.date, day("2024-01-02"));

    // persisted record is gone, not just masked
    assert_eq!(device.get(storage_keys::DAILY_SNAPSHOT).await, None);
    Ok(())
}

#[tokio::test]
async fn test_commit_drops_completion_marks_for_unselected_workouts() -> Result<()> {
    let store = SnapshotStore::new(memory_store());
    let p1 = squat_draft().into_preset()?;
    let stray = Uuid::new_v4();
    let completed: BTreeSet<Uuid> = [p1.id, stray].into_iter().collect();

    let committed = store
        .commit(vec![p1.clone()], completed, day("2024-01-01"))
        .await?;
    assert_eq!(committed.completed.len(), 1);
    assert!(committed.completed.contains(&p1.id));
    Ok(())
}

#[tokio::test]
async fn test_commit_replaces_whole_record() -> Result<()> {
    let store = SnapshotStore::new(memory_store());
    let p1 = squat_draft().into_preset()?;
    let p2 = bench_draft().into_preset()?;
    let completed: BTreeSet<Uuid> = [p1.id].into_iter().collect();
    store
        .commit(vec![p1, p2.clone()], completed, day("2024-01-01"))
        .await?;

    // re-selecting replaces, never merges
    store
        .commit(vec![p2.clone()], BTreeSet::new(), day("2024-01-01"))
        .await?;
    let restored = store.reconcile(day("2024-01-01")).await;
    assert_eq!(restored.workouts, vec![p2]);
    assert!(restored.completed.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_malformed_snapshot_treated_as_absent() -> Result<()> {
    let device = memory_store();
    device
        .set(storage_keys::DAILY_SNAPSHOT, "\"not a snapshot\"".into())
        .await?;

    let store = SnapshotStore::new(device);
    let snapshot = store.reconcile(day("2024-01-01")).await;
    assert!(snapshot.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_clear_discards_snapshot() -> Result<()> {
    let store = SnapshotStore::new(memory_store());
    let p1 = squat_draft().into_preset()?;
    store
        .commit(vec![p1], BTreeSet::new(), day("2024-01-01"))
        .await?;

    store.clear().await?;
    let snapshot = store.reconcile(day("2024-01-01")).await;
    assert!(snapshot.is_empty());
    Ok(())
}
