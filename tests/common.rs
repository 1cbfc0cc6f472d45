// ABOUTME: Shared test utilities for the mobile core integration tests
// ABOUTME: Provides quiet logging setup and store/model builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(dead_code)]

use chrono::NaiveDate;
use pierre_mobile_core::models::PresetDraft;
use pierre_mobile_core::storage::memory::MemoryStore;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fresh in-memory device store
pub fn memory_store() -> MemoryStore {
    init_test_logging();
    MemoryStore::new()
}

/// Parse an ISO calendar day
pub fn day(s: &str) -> NaiveDate {
    s.parse().expect("valid test date")
}

/// Draft for a standard barbell lift
pub fn squat_draft() -> PresetDraft {
    PresetDraft::new("Squat", "3", "10", Some("135"))
}

/// Draft for a second exercise
pub fn bench_draft() -> PresetDraft {
    PresetDraft::new("Bench Press", "5", "5", Some("185"))
}
