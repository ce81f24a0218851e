
use crate::{
    DocumentPath, DocumentStore, IdentityAccount, IdentityStore, StoreError, StoreResult,
};

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

/// In-memory document store that records every call it receives
#[derive(Default)]
pub(crate) struct FakeDocumentStore {
    documents: Mutex<HashMap<DocumentPath, Value>>,
    deleted: Mutex<Vec<DocumentPath>>,
    fail_deletes: bool,
}

impl FakeDocumentStore {
    pub(crate) fn failing() -> Self {
        Self {
            fail_deletes: true,
            ..Self::default()
        }
    }

    pub(crate) fn with_document(self, path: DocumentPath, data: Value) -> Self {
        self.documents.lock().unwrap().insert(path, data);
        self
    }

    pub(crate) fn contains(&self, path: &DocumentPath) -> bool {
        self.documents.lock().unwrap().contains_key(path)
    }

    pub(crate) fn len(&self) -> usize {
        self.documents.lock().unwrap().len()
    }

    pub(crate) fn delete_calls(&self) -> Vec<DocumentPath> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentStore for FakeDocumentStore {
    async fn get_document(&self, path: &DocumentPath) -> StoreResult<Option<Value>> {
        Ok(self.documents.lock().unwrap().get(path).cloned())
    }

    async fn set_document(&self, path: &DocumentPath, data: &Value) -> StoreResult<()> {
        self.documents
            .lock()
            .unwrap()
            .insert(path.clone(), data.clone());
        Ok(())
    }

    async fn delete_document(&self, path: &DocumentPath) -> StoreResult<()> {
        self.deleted.lock().unwrap().push(path.clone());
        if self.fail_deletes {
            return Err(StoreError::backend("document store unavailable"));
        }
        self.documents.lock().unwrap().remove(path);
        Ok(())
    }
}

/// In-memory identity store that records every call it receives
#[derive(Default)]
pub(crate) struct FakeIdentityStore {
    accounts: Mutex<HashMap<String, IdentityAccount>>,
    deleted: Mutex<Vec<String>>,
    fail_deletes: bool,
}

impl FakeIdentityStore {
    pub(crate) fn failing() -> Self {
        Self {
            fail_deletes: true,
            ..Self::default()
        }
    }

    pub(crate) fn with_account(self, uid: &str) -> Self {
        self.accounts
            .lock()
            .unwrap()
            .insert(uid.to_string(), IdentityAccount::new(uid));
        self
    }

    pub(crate) fn contains(&self, uid: &str) -> bool {
        self.accounts.lock().unwrap().contains_key(uid)
    }

    pub(crate) fn delete_calls(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdentityStore for FakeIdentityStore {
    async fn get_account(&self, uid: &str) -> StoreResult<Option<IdentityAccount>> {
        Ok(self.accounts.lock().unwrap().get(uid).cloned())
    }

    async fn create_account(&self, account: &IdentityAccount) -> StoreResult<()> {
        self.accounts
            .lock()
            .unwrap()
            .insert(account.uid.clone(), account.clone());
        Ok(())
    }

    async fn delete_account(&self, uid: &str) -> StoreResult<()> {
        self.deleted.lock().unwrap().push(uid.to_string());
        if self.fail_deletes {
            return Err(StoreError::backend("identity provider unavailable"));
        }
        match self.accounts.lock().unwrap().remove(uid) {
            Some(_) => Ok(()),
            None => Err(StoreError::identity_not_found(uid)),
        }
    }
}
