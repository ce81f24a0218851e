pub mod error;
pub mod handlers;
pub mod models;
pub mod stores;

pub use error::{AccountError, AccountResult, StoreError, StoreResult};
pub use error_location::ErrorLocation;
pub use handlers::account_deletion::AccountDeletionHandler;
pub use models::caller_identity::CallerIdentity;
pub use models::delete_account_response::DeleteAccountResponse;
pub use models::deletion_step::DeletionStep;
pub use models::document_path::DocumentPath;
pub use models::identity_account::IdentityAccount;
pub use stores::{DocumentStore, IdentityStore};

/// Collection holding one profile document per account, keyed by uid
pub const USERS_COLLECTION: &str = "users";

/// Caller-visible message for the unauthenticated error
pub const UNAUTHENTICATED_MESSAGE: &str = "Utilisateur non authentifié";

/// Caller-visible message for any failure while deleting
pub const INTERNAL_MESSAGE: &str = "Erreur lors de la suppression du compte";

#[cfg(test)]
mod tests;
