use crate::CallableError;

use acct_core::{
    AccountError, DeletionStep, INTERNAL_MESSAGE, StoreError, UNAUTHENTICATED_MESSAGE,
};

use axum::{http::StatusCode, response::IntoResponse};
use http_body_util::BodyExt;

async fn body_json(error: CallableError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_unauthenticated_returns_401_with_fixed_message() {
    let error: CallableError = AccountError::unauthenticated().into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["status"], "UNAUTHENTICATED");
    assert_eq!(json["error"]["message"], UNAUTHENTICATED_MESSAGE);
}

#[tokio::test]
async fn test_internal_returns_500_without_backend_detail() {
    let error: CallableError = AccountError::internal(
        DeletionStep::IdentityAccount,
        StoreError::backend("sqlite: database is locked at /srv/acct/data.db"),
    )
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["status"], "INTERNAL");
    assert_eq!(json["error"]["message"], INTERNAL_MESSAGE);
    assert!(!json.to_string().contains("locked"));
    assert!(!json.to_string().contains("identity_account"));
}

#[tokio::test]
async fn test_profile_and_identity_failures_render_identically() {
    let profile: CallableError = AccountError::internal(
        DeletionStep::ProfileRecord,
        StoreError::backend("a"),
    )
    .into();
    let identity: CallableError = AccountError::internal(
        DeletionStep::IdentityAccount,
        StoreError::identity_not_found("abc123"),
    )
    .into();

    let (profile_status, profile_json) = body_json(profile).await;
    let (identity_status, identity_json) = body_json(identity).await;

    assert_eq!(profile_status, identity_status);
    assert_eq!(profile_json, identity_json);
}
