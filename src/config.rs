// ABOUTME: Environment-driven runtime configuration
// ABOUTME: Resolves the data directory and deployment environment from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration for the mobile core

use crate::constants::env_config;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Deployment environment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" => Self::Production,
            "testing" => Self::Testing,
            _ => Self::Development,
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Runtime configuration for the mobile core
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Directory the file-backed store writes into
    pub data_dir: PathBuf,
    /// Deployment environment
    pub environment: Environment,
}

impl CoreConfig {
    /// Build configuration from environment variables.
    ///
    /// `PIERRE_MOBILE_DATA_DIR` overrides the data directory; otherwise the
    /// platform data dir is used, falling back to the working directory on
    /// platforms without one.
    #[must_use]
    pub fn from_env() -> Self {
        let data_dir = env::var(env_config::DATA_DIR).map_or_else(
            |_| {
                dirs::data_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("pierre-mobile")
            },
            PathBuf::from,
        );

        let environment = env::var(env_config::ENVIRONMENT)
            .map(|v| Environment::from_str_or_default(&v))
            .unwrap_or_default();

        tracing::debug!(data_dir = %data_dir.display(), %environment, "core configuration resolved");
        Self {
            data_dir,
            environment,
        }
    }
}
