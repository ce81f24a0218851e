//! Collaborator contracts for the stores an account lives in.
//!
//! Handles are built once per process and injected into handlers as
//! `Arc<dyn ...>`; implementations must be safe to share across requests.

use crate::{DocumentPath, IdentityAccount, StoreResult};

use async_trait::async_trait;
use serde_json::Value;

/// Document database keyed by collection and document id
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get_document(&self, path: &DocumentPath) -> StoreResult<Option<Value>>;

    /// Create or replace the document at `path`
    async fn set_document(&self, path: &DocumentPath, data: &Value) -> StoreResult<()>;

    /// Delete the document at `path`. A missing document is not an error.
    async fn delete_document(&self, path: &DocumentPath) -> StoreResult<()>;
}

/// Identity/authentication store keyed by uid
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn get_account(&self, uid: &str) -> StoreResult<Option<IdentityAccount>>;

    async fn create_account(&self, account: &IdentityAccount) -> StoreResult<()>;

    /// Delete the account for `uid`. Fails with
    /// [`StoreError::IdentityNotFound`](crate::StoreError::IdentityNotFound)
    /// when there is no such account.
    async fn delete_account(&self, uid: &str) -> StoreResult<()>;
}
