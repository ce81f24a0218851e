pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    accounts::delete_account::delete_user_account,
    callable_response::CallableResponse,
    error::{CallableError, Result as CallableResult},
    extractors::caller::Caller,
};
pub use app_state::AppState;
pub use metrics::Metrics;
pub use routes::build_router;

/// Route of the account deletion callable
pub const DELETE_USER_ACCOUNT_PATH: &str = "/deleteUserAccount";
