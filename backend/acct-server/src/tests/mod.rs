
use crate::AppState;

use acct_auth::JwtValidator;
use acct_core::AccountDeletionHandler;
use acct_db::{SqliteDocumentStore, SqliteIdentityStore};

use std::sync::Arc;

use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

pub(crate) const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

#[derive(Serialize)]
struct TestClaims<'a> {
    sub: &'a str,
    exp: i64,
    iat: i64,
}

pub(crate) fn create_token(uid: &str, expires_in_secs: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    encode(
        &Header::default(),
        &TestClaims {
            sub: uid,
            exp: now + expires_in_secs,
            iat: now,
        },
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .unwrap()
}

pub(crate) async fn create_test_state() -> AppState {
    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect(":memory:")
        .await
        .expect("Failed to create test pool");

    acct_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    let deletion = AccountDeletionHandler::new(
        Arc::new(SqliteDocumentStore::new(pool.clone())),
        Arc::new(SqliteIdentityStore::new(pool.clone())),
    );

    AppState::new(deletion, JwtValidator::with_hs256(TEST_SECRET), pool)
}
