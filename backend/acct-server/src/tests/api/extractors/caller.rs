use crate::Caller;
use crate::tests::{create_test_state, create_token};

use axum::{body::Body, extract::FromRequestParts, http::Request};

async fn extract(request: Request<Body>) -> Caller {
    let state = create_test_state().await;
    let (mut parts, _body) = request.into_parts();
    match Caller::from_request_parts(&mut parts, &state).await {
        Ok(caller) => caller,
        Err(never) => match never {},
    }
}

#[tokio::test]
async fn test_extractor_with_valid_token() {
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", create_token("abc123", 3600)))
        .body(Body::empty())
        .unwrap();

    let Caller(identity) = extract(request).await;

    assert_eq!(identity.unwrap().uid(), "abc123");
}

#[tokio::test]
async fn test_extractor_without_header_yields_none() {
    let request = Request::builder().body(Body::empty()).unwrap();

    let Caller(identity) = extract(request).await;

    assert!(identity.is_none());
}

#[tokio::test]
async fn test_extractor_with_expired_token_yields_none() {
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", create_token("abc123", -3600)))
        .body(Body::empty())
        .unwrap();

    let Caller(identity) = extract(request).await;

    assert!(identity.is_none());
}

#[tokio::test]
async fn test_extractor_with_wrong_scheme_yields_none() {
    let request = Request::builder()
        .header("Authorization", format!("Token {}", create_token("abc123", 3600)))
        .body(Body::empty())
        .unwrap();

    let Caller(identity) = extract(request).await;

    assert!(identity.is_none());
}

#[tokio::test]
async fn test_extractor_ignores_user_id_header() {
    let request = Request::builder()
        .header("X-User-Id", "xyz789")
        .body(Body::empty())
        .unwrap();

    let Caller(identity) = extract(request).await;

    assert!(identity.is_none());
}
