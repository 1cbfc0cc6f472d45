// ABOUTME: Main library entry point for the Pierre mobile fitness core
// ABOUTME: Device-local stores, daily snapshot reconciliation, and goal sync for mobile screens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Mobile Core
//!
//! Storage and sync core for Pierre mobile fitness applications. Screen
//! controllers (Home, Workouts, Progress, Auth) own ephemeral view state and
//! call into this crate for everything that outlives a render: workout
//! presets, the daily workout snapshot, goals, and body measurements.
//!
//! ## Architecture
//!
//! - **Storage**: a [`storage::KeyValueStore`] seam over the device-local
//!   key-value store, with in-memory and file-backed implementations
//! - **Presets**: whole-collection persistence of workout templates
//! - **Snapshot**: reconciles the persisted "today" record against the
//!   current calendar day, resetting on day rollover
//! - **Goals**: one [`goals::GoalStore`] trait, two backends: local
//!   key-value and remote per-user document collection with push updates
//! - **Auth**: injected user context and an [`auth::AuthProvider`] seam over
//!   the external authentication service
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_mobile_core::models::PresetDraft;
//! use pierre_mobile_core::presets::PresetStore;
//! use pierre_mobile_core::storage::memory::MemoryStore;
//!
//! # async fn example() -> pierre_mobile_core::errors::AppResult<()> {
//! let store = PresetStore::new(MemoryStore::new());
//! let squat = store
//!     .add(PresetDraft::new("Squat", "3", "10", Some("135")))
//!     .await?;
//! assert_eq!(store.load().await.len(), 1);
//! store.remove(squat.id).await?;
//! # Ok(())
//! # }
//! ```

/// Authentication provider seam and credential validation
pub mod auth;

/// Environment-driven runtime configuration
pub mod config;

/// Storage keys and validation limits
pub mod constants;

/// Injected per-user identity context
pub mod context;

/// Unified error types and result alias
pub mod errors;

/// Goal store trait with local and synced backends
pub mod goals;

/// Structured logging configuration
pub mod logging;

/// Body measurement log with title grouping
pub mod measurements;

/// Core data models shared across stores
pub mod models;

/// Local workout preset store
pub mod presets;

/// Motivational quote rotation for the home screen
pub mod quotes;

/// Daily workout snapshot reconciliation
pub mod snapshot;

/// Key-value storage abstraction and backends
pub mod storage;

/// Remote document-collection sync seam
pub mod sync;
