// ABOUTME: Authentication seam over the external identity service
// ABOUTME: Credential validation, typed sign-in/sign-up failures, and a test provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Authentication
//!
//! The external authentication service is a black box reached through
//! [`AuthProvider`]. This module owns what the core can decide without the
//! network: sign-up field validation (matching confirmations, minimum
//! password length, plausible email) and the mapping of provider failures to
//! the user-facing messages the Auth screens display.
//!
//! A successful session yields the stable user identifier the synced stores
//! are composed with via [`crate::context::UserContext`].

use crate::constants::{limits::MIN_PASSWORD_LENGTH, storage_keys};
use crate::context::UserContext;
use crate::errors::AppResult;
use crate::storage::{self, KeyValueStore};
use dashmap::DashMap;
use thiserror::Error;
use uuid::Uuid;

/// Typed sign-in/sign-up failure, mirroring the provider's error codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthFailure {
    /// Wrong email/password combination
    #[error("Invalid email or password")]
    InvalidCredentials,
    /// No account exists for the email
    #[error("No account found with this email")]
    UserNotFound,
    /// Sign-up attempted with an email that already has an account
    #[error("Email already in use")]
    EmailAlreadyInUse,
    /// Password shorter than the provider minimum
    #[error("Password should be at least {MIN_PASSWORD_LENGTH} characters")]
    WeakPassword,
    /// Email failed basic format validation
    #[error("Invalid email address")]
    InvalidEmail,
    /// A required sign-in/sign-up field was left empty
    #[error("Please fill in all fields")]
    MissingFields,
    /// Email and confirmation do not match
    #[error("Emails do not match")]
    EmailMismatch,
    /// Password and confirmation do not match
    #[error("Passwords do not match")]
    PasswordMismatch,
    /// Anything the provider reported that has no specific mapping
    #[error("Something went wrong. Please try again.")]
    Unexpected,
}

/// A signed-in session as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    /// Stable user identifier
    pub user_id: Uuid,
    /// Email the session was created with
    pub email: String,
    /// Display name captured at sign-up
    pub display_name: Option<String>,
}

impl AuthSession {
    /// Identity context for composing the synced stores
    #[must_use]
    pub fn user_context(&self) -> UserContext {
        UserContext::for_user(self.user_id)
    }
}

/// Validated sign-up input
#[derive(Debug, Clone)]
pub struct SignUpRequest {
    /// Display name
    pub name: String,
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

impl SignUpRequest {
    /// Validate raw sign-up form fields, including confirmations.
    ///
    /// # Errors
    ///
    /// Returns the first failing check in form order: missing fields, email
    /// mismatch, password mismatch, invalid email, weak password.
    pub fn from_form(
        name: &str,
        email: &str,
        confirm_email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Self, AuthFailure> {
        if name.trim().is_empty()
            || email.trim().is_empty()
            || confirm_email.trim().is_empty()
            || password.is_empty()
            || confirm_password.is_empty()
        {
            return Err(AuthFailure::MissingFields);
        }
        if email.trim() != confirm_email.trim() {
            return Err(AuthFailure::EmailMismatch);
        }
        if password != confirm_password {
            return Err(AuthFailure::PasswordMismatch);
        }

        let email = email.trim().to_owned();
        if !is_plausible_email(&email) {
            return Err(AuthFailure::InvalidEmail);
        }
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(AuthFailure::WeakPassword);
        }

        Ok(Self {
            name: name.trim().to_owned(),
            email,
            password: password.to_owned(),
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

/// Device-local copy of the display name captured at sign-up.
///
/// The Home greeting needs the name between launches without a round trip to
/// the identity service, so it is persisted like the other records: one
/// value under a fixed key, replaced at sign-in and dropped at sign-out.
pub struct ProfileStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ProfileStore<S> {
    /// Create a profile store over the given backend
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist the session's display name. A session without one clears any
    /// previously stored name.
    ///
    /// # Errors
    ///
    /// Returns `StorageWrite` when the value cannot be persisted.
    pub async fn remember(&self, session: &AuthSession) -> AppResult<()> {
        match &session.display_name {
            Some(name) => {
                storage::write_json(&self.store, storage_keys::DISPLAY_NAME, name).await
            }
            None => self.store.remove(storage_keys::DISPLAY_NAME).await,
        }
    }

    /// The stored display name. Absent or undecodable values read as `None`.
    pub async fn display_name(&self) -> Option<String> {
        storage::read_json(&self.store, storage_keys::DISPLAY_NAME).await
    }

    /// Drop the stored name at sign-out.
    ///
    /// # Errors
    ///
    /// Returns `StorageWrite` when the removal cannot be persisted.
    pub async fn forget(&self) -> AppResult<()> {
        self.store.remove(storage_keys::DISPLAY_NAME).await
    }
}

/// Client for the external authentication service
#[async_trait::async_trait]
pub trait AuthProvider: Send + Sync {
    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns a typed [`AuthFailure`]; `MissingFields` when either field is
    /// empty, otherwise whatever the provider reports.
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthFailure>;

    /// Create an account from a validated sign-up request.
    ///
    /// # Errors
    ///
    /// Returns `EmailAlreadyInUse` or another provider-reported failure.
    async fn sign_up(&self, request: SignUpRequest) -> Result<AuthSession, AuthFailure>;
}

/// In-memory provider for tests and local development
#[derive(Default)]
pub struct InMemoryAuthProvider {
    accounts: DashMap<String, (Uuid, String, String)>,
}

impl InMemoryAuthProvider {
    /// Create a provider with no accounts
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl AuthProvider for InMemoryAuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthFailure> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthFailure::MissingFields);
        }

        let account = self
            .accounts
            .get(email.trim())
            .ok_or(AuthFailure::UserNotFound)?;
        let (user_id, stored_password, name) = account.value();
        if stored_password != password {
            return Err(AuthFailure::InvalidCredentials);
        }

        Ok(AuthSession {
            user_id: *user_id,
            email: email.trim().to_owned(),
            display_name: Some(name.clone()),
        })
    }

    async fn sign_up(&self, request: SignUpRequest) -> Result<AuthSession, AuthFailure> {
        if self.accounts.contains_key(&request.email) {
            return Err(AuthFailure::EmailAlreadyInUse);
        }

        let user_id = Uuid::new_v4();
        self.accounts.insert(
            request.email.clone(),
            (user_id, request.password, request.name.clone()),
        );

        Ok(AuthSession {
            user_id,
            email: request.email,
            display_name: Some(request.name),
        })
    }
}
