#![allow(dead_code)]

use acct_core::IdentityAccount;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    acct_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn test_account(uid: &str) -> IdentityAccount {
    let mut account = IdentityAccount::new(uid);
    account.email = Some(format!("{uid}@example.com"));
    account.display_name = Some(format!("Player {uid}"));
    account
}
