// ABOUTME: Integration tests for the local preset store
// ABOUTME: Covers persistence round-trips, in-place edits, removal, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod common;

use anyhow::Result;
use common::{bench_draft, memory_store, squat_draft};
use pierre_mobile_core::constants::storage_keys;
use pierre_mobile_core::errors::ErrorCode;
use pierre_mobile_core::models::PresetDraft;
use pierre_mobile_core::presets::PresetStore;
use pierre_mobile_core::storage::KeyValueStore;

#[tokio::test]
async fn test_add_then_load_returns_preset() -> Result<()> {
    let store = PresetStore::new(memory_store());

    let squat = store.add(squat_draft()).await?;
    assert_eq!(squat.name, "Squat");
    assert_eq!(squat.sets, "3");
    assert_eq!(squat.reps, "10");
    assert_eq!(squat.weight.as_deref(), Some("135"));

    let presets = store.load().await;
    assert_eq!(presets, vec![squat]);
    Ok(())
}

#[tokio::test]
async fn test_save_load_fixed_point() -> Result<()> {
    let store = PresetStore::new(memory_store());
    store.add(squat_draft()).await?;
    store.add(bench_draft()).await?;

    let loaded = store.load().await;
    store.save(&loaded).await?;
    assert_eq!(store.load().await, loaded);
    Ok(())
}

#[tokio::test]
async fn test_update_replaces_in_place_without_reordering() -> Result<()> {
    let store = PresetStore::new(memory_store());
    let squat = store.add(squat_draft()).await?;
    let bench = store.add(bench_draft()).await?;

    let edited = store
        .update(squat.id, PresetDraft::new("Front Squat", "4", "8", None))
        .await?;
    assert_eq!(edited.id, squat.id);

    let presets = store.load().await;
    assert_eq!(presets.len(), 2);
    assert_eq!(presets[0].name, "Front Squat");
    assert_eq!(presets[0].weight, None);
    assert_eq!(presets[1], bench);
    Ok(())
}

#[tokio::test]
async fn test_update_unknown_id_rejected() -> Result<()> {
    let store = PresetStore::new(memory_store());
    store.add(squat_draft()).await?;

    let err = store
        .update(uuid::Uuid::new_v4(), bench_draft())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(store.load().await.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_remove_keeps_other_identities_stable() -> Result<()> {
    let store = PresetStore::new(memory_store());
    let squat = store.add(squat_draft()).await?;
    let bench = store.add(bench_draft()).await?;

    store.remove(squat.id).await?;
    assert_eq!(store.load().await, vec![bench.clone()]);

    // unknown id is a no-op
    store.remove(squat.id).await?;
    assert_eq!(store.load().await, vec![bench]);
    Ok(())
}

#[tokio::test]
async fn test_validation_failure_leaves_collection_unchanged() -> Result<()> {
    let store = PresetStore::new(memory_store());
    store.add(squat_draft()).await?;

    let err = store
        .add(PresetDraft::new("Deadlift", "  ", "5", None))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert_eq!(store.load().await.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_corrupt_blob_loads_as_empty() -> Result<()> {
    let device = memory_store();
    device
        .set(storage_keys::PRESETS, "{not json".into())
        .await?;

    let store = PresetStore::new(device);
    assert!(store.load().await.is_empty());
    Ok(())
}
