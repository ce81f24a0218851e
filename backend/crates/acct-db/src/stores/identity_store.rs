use crate::DbError;

use acct_core::{IdentityAccount, IdentityStore, StoreError, StoreResult};

use std::panic::Location;

use async_trait::async_trait;
use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::{Row, SqlitePool};

/// Column named by SQLite in "UNIQUE constraint failed: ..." for duplicate emails
const EMAIL_COLUMN: &str = "identity_accounts.email";

#[derive(Clone)]
pub struct SqliteIdentityStore {
    pool: SqlitePool,
}

impl SqliteIdentityStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityStore for SqliteIdentityStore {
    async fn get_account(&self, uid: &str) -> StoreResult<Option<IdentityAccount>> {
        let row = sqlx::query(
            r#"
              SELECT uid, email, display_name, disabled, created_at
              FROM identity_accounts
              WHERE uid = ?
              "#,
        )
        .bind(uid)
        .fetch_optional(&self.pool)
        .await
        .map_err(DbError::from)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let created_at: i64 = row.try_get("created_at").map_err(DbError::from)?;

        Ok(Some(IdentityAccount {
            uid: row.try_get("uid").map_err(DbError::from)?,
            email: row.try_get("email").map_err(DbError::from)?,
            display_name: row.try_get("display_name").map_err(DbError::from)?,
            disabled: row.try_get("disabled").map_err(DbError::from)?,
            created_at: DateTime::from_timestamp(created_at, 0).unwrap_or_default(),
        }))
    }

    async fn create_account(&self, account: &IdentityAccount) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
              INSERT INTO identity_accounts (uid, email, display_name, disabled, created_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(&account.uid)
        .bind(&account.email)
        .bind(&account.display_name)
        .bind(account.disabled)
        .bind(account.created_at.timestamp())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            // uid is the primary key; email has its own unique index
            Err(sqlx::Error::Database(e))
                if e.is_unique_violation() && e.message().contains(EMAIL_COLUMN) =>
            {
                Err(StoreError::EmailTaken {
                    email: account.email.clone().unwrap_or_default(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(StoreError::IdentityExists {
                    uid: account.uid.clone(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Err(e) => Err(DbError::from(e).into()),
        }
    }

    async fn delete_account(&self, uid: &str) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM identity_accounts WHERE uid = ?")
            .bind(uid)
            .execute(&self.pool)
            .await
            .map_err(DbError::from)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::identity_not_found(uid));
        }

        Ok(())
    }
}
