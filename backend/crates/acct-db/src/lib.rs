pub mod connection;
pub mod error;
pub mod stores;

pub use connection::{connect, run_migrations};
pub use error::{DbError, Result};
pub use stores::document_store::SqliteDocumentStore;
pub use stores::identity_store::SqliteIdentityStore;
