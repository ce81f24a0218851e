use crate::{AuthError, Result as AuthErrorResult};

const BEARER_PREFIX: &str = "Bearer ";

/// Pull the token out of an `Authorization: Bearer <token>` header value
#[track_caller]
pub fn bearer_token(header: Option<&str>) -> AuthErrorResult<&str> {
    let Some(header) = header else {
        return Err(AuthError::missing_token());
    };

    let Some(token) = header.strip_prefix(BEARER_PREFIX).map(str::trim) else {
        return Err(AuthError::not_bearer());
    };

    if token.is_empty() {
        return Err(AuthError::missing_token());
    }

    Ok(token)
}
