pub mod bearer;
pub mod claims;
pub mod error;
pub mod jwt_validator;

pub use bearer::bearer_token;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;

/// Upper bound on uid length accepted from a token
pub const MAX_UID_LENGTH: usize = 128;
