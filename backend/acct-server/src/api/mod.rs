pub mod accounts;
pub mod callable_response;
pub mod error;
pub mod extractors;
