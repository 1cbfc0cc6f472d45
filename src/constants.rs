// ABOUTME: Shared constants for storage keys and validation limits
// ABOUTME: Single source of truth for device-local key names used by the stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Keys under which the stores persist their blobs in the device-local
/// key-value store. One serialized record per key, whole-value overwrite.
pub mod storage_keys {
    /// Workout preset collection
    pub const PRESETS: &str = "pierre_presets";
    /// Today's workout snapshot
    pub const DAILY_SNAPSHOT: &str = "pierre_daily_snapshot";
    /// Goal list (local deployment mode only)
    pub const GOALS: &str = "pierre_goals";
    /// Body measurement log
    pub const MEASUREMENTS: &str = "pierre_measurements";
    /// Display name of the signed-in user
    pub const DISPLAY_NAME: &str = "pierre_display_name";
}

/// Validation limits
pub mod limits {
    /// Minimum password length accepted at sign-up
    pub const MIN_PASSWORD_LENGTH: usize = 6;
}

/// Environment variable names recognized by [`crate::config`]
pub mod env_config {
    /// Override for the device data directory
    pub const DATA_DIR: &str = "PIERRE_MOBILE_DATA_DIR";
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}
