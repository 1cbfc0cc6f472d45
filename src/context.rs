// ABOUTME: Injected per-user identity context for synced operations
// ABOUTME: Replaces ambient global auth state with an explicit handle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use uuid::Uuid;

/// Identity handle passed explicitly to any component that needs to know who
/// is signed in. Constructed from the authentication service's session at
/// composition time; never read from process-wide state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserContext {
    user_id: Option<Uuid>,
}

impl UserContext {
    /// Context with no signed-in user
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { user_id: None }
    }

    /// Context for a signed-in user
    #[must_use]
    pub const fn for_user(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    /// The signed-in user, if any
    #[must_use]
    pub const fn user_id(&self) -> Option<Uuid> {
        self.user_id
    }

    /// The signed-in user, or `AuthRequired` when there is none.
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` for an anonymous context.
    pub fn require_user(&self) -> AppResult<Uuid> {
        self.user_id.ok_or_else(AppError::auth_required)
    }
}
