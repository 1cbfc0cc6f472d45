// ABOUTME: Unified error handling for the mobile core library
// ABOUTME: Defines error codes, the AppError type, and constructor helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Centralized error types shared by every store in the crate. Screens match
//! on [`ErrorCode`] to decide how a failure is presented: validation errors
//! block the attempted mutation with a message, remote failures surface as a
//! dismissible notice, and local storage read failures are never surfaced at
//! all (the stores recover silently to empty state).

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField,
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,

    // Authentication
    #[serde(rename = "AUTH_REQUIRED")]
    AuthRequired,
    #[serde(rename = "AUTH_FAILED")]
    AuthFailed,

    // Local storage
    #[serde(rename = "STORAGE_READ")]
    StorageRead,
    #[serde(rename = "STORAGE_WRITE")]
    StorageWrite,
    #[serde(rename = "SERIALIZATION_ERROR")]
    Serialization,

    // Remote sync
    #[serde(rename = "REMOTE_OPERATION_FAILED")]
    RemoteOperationFailed,

    // Internal
    #[serde(rename = "INTERNAL_ERROR")]
    Internal,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::MissingRequiredField => "A required field is missing",
            Self::InvalidInput => "The provided input is invalid",
            Self::AuthRequired => "Sign in to use this feature",
            Self::AuthFailed => "Authentication failed",
            Self::StorageRead => "Local storage could not be read",
            Self::StorageWrite => "Local storage could not be written",
            Self::Serialization => "Stored data could not be decoded",
            Self::RemoteOperationFailed => "The operation could not be completed",
            Self::Internal => "An internal error occurred",
        }
    }

    /// Whether the screen should surface this error to the user.
    ///
    /// Storage read/decode failures are recovered silently by the stores
    /// (state falls back to empty); everything else is shown.
    #[must_use]
    pub const fn is_user_visible(&self) -> bool {
        !matches!(self, Self::StorageRead | Self::Serialization)
    }
}

/// Unified error type for the mobile core
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach a source error for chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Required field empty after trimming
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("{} is required", field.into()),
        )
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Operation requires a signed-in user
    #[must_use]
    pub fn auth_required() -> Self {
        Self::new(ErrorCode::AuthRequired, "No signed-in user")
    }

    /// Local storage write failure
    pub fn storage_write(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageWrite, message)
    }

    /// Remote create/delete/subscribe failure; not retried automatically
    pub fn remote_operation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::RemoteOperationFailed, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::Serialization, error.to_string()).with_source(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::new(ErrorCode::StorageWrite, error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
