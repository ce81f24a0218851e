use crate::DbError;

use acct_core::{DocumentPath, DocumentStore, StoreResult};

use std::panic::Location;

use async_trait::async_trait;
use chrono::Utc;
use error_location::ErrorLocation;
use serde_json::Value;
use sqlx::{Row, SqlitePool};

/// Documents stored as JSON text, one row per `(collection, id)`
#[derive(Clone)]
pub struct SqliteDocumentStore {
    pool: SqlitePool,
}

impl SqliteDocumentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Number of documents in `collection`
    pub async fn count(&self, collection: &str) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE collection = ?")
            .bind(collection)
            .fetch_one(&self.pool)
            .await
            .map_err(DbError::from)?;

        Ok(count)
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn get_document(&self, path: &DocumentPath) -> StoreResult<Option<Value>> {
        let row = sqlx::query("SELECT data FROM documents WHERE collection = ? AND id = ?")
            .bind(path.collection())
            .bind(path.id())
            .fetch_optional(&self.pool)
            .await
            .map_err(DbError::from)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let data: String = row.try_get("data").map_err(DbError::from)?;
        let value = serde_json::from_str(&data).map_err(|source| DbError::Json {
            collection: path.collection().to_string(),
            id: path.id().to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Some(value))
    }

    async fn set_document(&self, path: &DocumentPath, data: &Value) -> StoreResult<()> {
        let now = Utc::now().timestamp();

        sqlx::query(
            r#"
              INSERT INTO documents (collection, id, data, created_at, updated_at)
              VALUES (?, ?, ?, ?, ?)
              ON CONFLICT (collection, id)
              DO UPDATE SET data = excluded.data, updated_at = excluded.updated_at
              "#,
        )
        .bind(path.collection())
        .bind(path.id())
        .bind(data.to_string())
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(DbError::from)?;

        Ok(())
    }

    async fn delete_document(&self, path: &DocumentPath) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = ? AND id = ?")
            .bind(path.collection())
            .bind(path.id())
            .execute(&self.pool)
            .await
            .map_err(DbError::from)?;

        if result.rows_affected() == 0 {
            log::debug!("Document {path} already absent");
        }

        Ok(())
    }
}
