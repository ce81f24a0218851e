#![allow(dead_code)]

//! Test infrastructure for acct-server API tests

use acct_auth::JwtValidator;
use acct_core::{
    AccountDeletionHandler, DocumentPath, DocumentStore, IdentityAccount, IdentityStore,
    StoreError, StoreResult,
};
use acct_db::{SqliteDocumentStore, SqliteIdentityStore};
use acct_server::AppState;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

#[derive(Serialize)]
struct TestClaims<'a> {
    sub: &'a str,
    exp: i64,
    iat: i64,
}

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    acct_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Mint an HS256 token for `uid` signed with [`TEST_SECRET`]
pub fn create_token(uid: &str) -> String {
    create_token_expiring_in(uid, 3600)
}

pub fn create_token_expiring_in(uid: &str, secs: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    encode(
        &Header::default(),
        &TestClaims {
            sub: uid,
            exp: now + secs,
            iat: now,
        },
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .expect("Failed to encode token")
}

/// Create AppState backed by SQLite stores
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    let deletion = AccountDeletionHandler::new(
        Arc::new(SqliteDocumentStore::new(pool.clone())),
        Arc::new(SqliteIdentityStore::new(pool.clone())),
    );

    AppState::new(deletion, JwtValidator::with_hs256(TEST_SECRET), pool)
}

/// Create AppState whose identity store refuses every deletion
pub async fn create_failing_identity_app_state() -> AppState {
    let pool = create_test_pool().await;
    let deletion = AccountDeletionHandler::new(
        Arc::new(SqliteDocumentStore::new(pool.clone())),
        Arc::new(UnavailableIdentityStore),
    );

    AppState::new(deletion, JwtValidator::with_hs256(TEST_SECRET), pool)
}

/// Create AppState whose identity deletions take `delay` before landing
pub async fn create_slow_identity_app_state(delay: Duration) -> AppState {
    let pool = create_test_pool().await;
    let deletion = AccountDeletionHandler::new(
        Arc::new(SqliteDocumentStore::new(pool.clone())),
        Arc::new(SlowIdentityStore {
            inner: SqliteIdentityStore::new(pool.clone()),
            delay,
        }),
    );

    AppState::new(deletion, JwtValidator::with_hs256(TEST_SECRET), pool)
}

/// Seed a profile document and identity account for `uid`
pub async fn create_test_account(pool: &SqlitePool, uid: &str) {
    SqliteDocumentStore::new(pool.clone())
        .set_document(
            &DocumentPath::profile(uid),
            &json!({ "uid": uid, "displayName": format!("Player {uid}") }),
        )
        .await
        .expect("Failed to create profile");

    let mut account = IdentityAccount::new(uid);
    account.email = Some(format!("{uid}@test.local"));
    SqliteIdentityStore::new(pool.clone())
        .create_account(&account)
        .await
        .expect("Failed to create identity account");
}

pub async fn create_test_document(pool: &SqlitePool, collection: &str, id: &str, data: Value) {
    SqliteDocumentStore::new(pool.clone())
        .set_document(&DocumentPath::new(collection, id), &data)
        .await
        .expect("Failed to create document");
}

pub async fn get_document(pool: &SqlitePool, collection: &str, id: &str) -> Option<Value> {
    SqliteDocumentStore::new(pool.clone())
        .get_document(&DocumentPath::new(collection, id))
        .await
        .expect("Failed to read document")
}

pub async fn get_account(pool: &SqlitePool, uid: &str) -> Option<IdentityAccount> {
    SqliteIdentityStore::new(pool.clone())
        .get_account(uid)
        .await
        .expect("Failed to read identity account")
}

/// Identity store whose backend is always down
pub struct UnavailableIdentityStore;

#[async_trait]
impl IdentityStore for UnavailableIdentityStore {
    async fn get_account(&self, _uid: &str) -> StoreResult<Option<IdentityAccount>> {
        Err(StoreError::backend("identity backend unavailable"))
    }

    async fn create_account(&self, _account: &IdentityAccount) -> StoreResult<()> {
        Err(StoreError::backend("identity backend unavailable"))
    }

    async fn delete_account(&self, _uid: &str) -> StoreResult<()> {
        Err(StoreError::backend("identity backend unavailable"))
    }
}

/// SQLite identity store with a fixed delay before each deletion
pub struct SlowIdentityStore {
    inner: SqliteIdentityStore,
    delay: Duration,
}

#[async_trait]
impl IdentityStore for SlowIdentityStore {
    async fn get_account(&self, uid: &str) -> StoreResult<Option<IdentityAccount>> {
        self.inner.get_account(uid).await
    }

    async fn create_account(&self, account: &IdentityAccount) -> StoreResult<()> {
        self.inner.create_account(account).await
    }

    async fn delete_account(&self, uid: &str) -> StoreResult<()> {
        tokio::time::sleep(self.delay).await;
        self.inner.delete_account(uid).await
    }
}
