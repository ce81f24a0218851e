//! Account deletion orchestration
//!
//! Deletes the caller's profile record, then their identity account. The two
//! stores are independent and there is no transaction spanning them: if the
//! identity deletion fails after the profile is gone, the account stays
//! partially deleted and the caller gets an internal error. Nothing is
//! rolled back.

use crate::{
    AccountError, AccountResult, CallerIdentity, DeleteAccountResponse, DeletionStep,
    DocumentPath, DocumentStore, IdentityStore, StoreError,
};

use std::sync::Arc;

use log::{debug, error, info, warn};

pub struct AccountDeletionHandler {
    documents: Arc<dyn DocumentStore>,
    identities: Arc<dyn IdentityStore>,
}

impl AccountDeletionHandler {
    pub fn new(documents: Arc<dyn DocumentStore>, identities: Arc<dyn IdentityStore>) -> Self {
        Self {
            documents,
            identities,
        }
    }

    /// Delete the account belonging to `caller`.
    ///
    /// `None` means the request carried no verified identity; that fails
    /// with [`AccountError::Unauthenticated`] before touching either store.
    pub async fn delete_account(
        &self,
        caller: Option<&CallerIdentity>,
    ) -> AccountResult<DeleteAccountResponse> {
        let Some(caller) = caller else {
            warn!("Account deletion rejected: no authenticated caller");
            return Err(AccountError::unauthenticated());
        };

        let uid = caller.uid();
        let profile_path = DocumentPath::profile(uid);
        info!("Deleting account {uid}");

        self.documents
            .delete_document(&profile_path)
            .await
            .map_err(|e| Self::failure(uid, DeletionStep::ProfileRecord, e))?;
        debug!("Deleted profile record {profile_path}");

        self.identities
            .delete_account(uid)
            .await
            .map_err(|e| Self::failure(uid, DeletionStep::IdentityAccount, e))?;
        debug!("Deleted identity account {uid}");

        info!("Account {uid} deleted");
        Ok(DeleteAccountResponse::succeeded())
    }

    #[track_caller]
    fn failure(uid: &str, step: DeletionStep, source: StoreError) -> AccountError {
        if step == DeletionStep::IdentityAccount {
            error!(
                "Delete account error for {uid} at {step} (profile record already deleted): {source}"
            );
        } else {
            error!("Delete account error for {uid} at {step}: {source}");
        }
        AccountError::internal(step, source)
    }
}
