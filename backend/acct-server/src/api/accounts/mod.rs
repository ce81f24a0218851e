pub mod delete_account;
