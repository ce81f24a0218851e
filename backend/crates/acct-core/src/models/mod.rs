pub mod caller_identity;
pub mod delete_account_response;
pub mod deletion_step;
pub mod document_path;
pub mod identity_account;
