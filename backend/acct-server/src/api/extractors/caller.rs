//! Axum extractor for the verified caller identity

use crate::AppState;

use acct_auth::{AuthError, bearer_token};
use acct_core::CallerIdentity;

use std::convert::Infallible;
use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Verified identity of the caller, or `None` when the request carries no
/// usable credentials.
///
/// Never rejects: a missing, malformed, expired or badly signed token all
/// yield `Caller(None)` and the handler decides what that means.
pub struct Caller(pub Option<CallerIdentity>);

impl FromRequestParts<AppState> for Caller {
    type Rejection = Infallible;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let identity = match parts.headers.get(AUTHORIZATION) {
                None => Err(AuthError::missing_token()),
                Some(value) => value
                    .to_str()
                    .map_err(|_| AuthError::not_bearer())
                    .and_then(|header| bearer_token(Some(header)))
                    .and_then(|token| state.jwt_validator.identify(token)),
            };

            match identity {
                Ok(identity) => {
                    log::debug!("Authenticated caller {}", identity.uid());
                    Ok(Caller(Some(identity)))
                }
                Err(AuthError::MissingToken { .. }) => {
                    log::debug!("No ID token on request");
                    Ok(Caller(None))
                }
                Err(e) => {
                    log::warn!("Ignoring caller credentials ({}): {}", e.reason(), e);
                    Ok(Caller(None))
                }
            }
        }
    }
}
