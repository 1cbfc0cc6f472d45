// ABOUTME: Integration tests for the authentication seam
// ABOUTME: Covers sign-up, sign-in, failure mapping, and context composition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod common;

use anyhow::Result;
use common::{init_test_logging, memory_store};
use pierre_mobile_core::auth::{
    AuthFailure, AuthProvider, InMemoryAuthProvider, ProfileStore, SignUpRequest,
};

fn valid_request() -> SignUpRequest {
    SignUpRequest::from_form(
        "Alex",
        "alex@example.com",
        "alex@example.com",
        "secret1",
        "secret1",
    )
    .expect("valid sign-up form")
}

#[tokio::test]
async fn test_sign_up_then_sign_in() -> Result<()> {
    init_test_logging();
    let provider = InMemoryAuthProvider::new();

    let created = provider.sign_up(valid_request()).await?;
    assert_eq!(created.display_name.as_deref(), Some("Alex"));

    let session = provider.sign_in("alex@example.com", "secret1").await?;
    assert_eq!(session.user_id, created.user_id);
    assert_eq!(session.user_context().user_id(), Some(created.user_id));
    Ok(())
}

#[tokio::test]
async fn test_duplicate_email_rejected() -> Result<()> {
    init_test_logging();
    let provider = InMemoryAuthProvider::new();
    provider.sign_up(valid_request()).await?;

    let err = provider.sign_up(valid_request()).await.unwrap_err();
    assert_eq!(err, AuthFailure::EmailAlreadyInUse);
    Ok(())
}

#[tokio::test]
async fn test_display_name_persists_across_instances() -> Result<()> {
    init_test_logging();
    let provider = InMemoryAuthProvider::new();
    let session = provider.sign_up(valid_request()).await?;

    let device = memory_store();
    ProfileStore::new(device.clone()).remember(&session).await?;

    // a fresh store over the same device sees the name
    let profile = ProfileStore::new(device);
    assert_eq!(profile.display_name().await.as_deref(), Some("Alex"));

    profile.forget().await?;
    assert_eq!(profile.display_name().await, None);
    Ok(())
}

#[tokio::test]
async fn test_sign_in_failures_are_typed() -> Result<()> {
    init_test_logging();
    let provider = InMemoryAuthProvider::new();
    provider.sign_up(valid_request()).await?;

    assert_eq!(
        provider.sign_in("alex@example.com", "wrong").await.unwrap_err(),
        AuthFailure::InvalidCredentials
    );
    assert_eq!(
        provider.sign_in("nobody@example.com", "secret1").await.unwrap_err(),
        AuthFailure::UserNotFound
    );
    assert_eq!(
        provider.sign_in("", "").await.unwrap_err(),
        AuthFailure::MissingFields
    );
    Ok(())
}
