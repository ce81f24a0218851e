//! Callable error responses
//!
//! Errors are rendered as `{"error": {"status": ..., "message": ...}}` with a
//! fixed, caller-safe message. Backend detail never reaches the body.

use acct_core::{AccountError, INTERNAL_MESSAGE};

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct CallableErrorResponse {
    pub error: CallableErrorBody,
}

#[derive(Debug, Serialize)]
pub struct CallableErrorBody {
    /// Canonical status name (e.g., "UNAUTHENTICATED", "INTERNAL")
    pub status: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum CallableError {
    /// No verified caller identity (401)
    #[error("Unauthenticated: {message} {location}")]
    Unauthenticated {
        message: String,
        location: ErrorLocation,
    },

    /// Any failure while serving the call (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl CallableError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn status_name(&self) -> &'static str {
        match self {
            Self::Unauthenticated { .. } => "UNAUTHENTICATED",
            Self::Internal { .. } => "INTERNAL",
        }
    }

    #[track_caller]
    pub fn internal() -> Self {
        Self::Internal {
            message: INTERNAL_MESSAGE.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for CallableError {
    fn into_response(self) -> Response {
        // Full cause was already logged where the error was collapsed
        log::debug!("{}", self);

        let status = self.status_code();
        let body = CallableErrorBody {
            status: self.status_name().to_string(),
            message: match self {
                Self::Unauthenticated { message, .. } | Self::Internal { message, .. } => message,
            },
        };

        (status, Json(CallableErrorResponse { error: body })).into_response()
    }
}

/// Collapse account errors into their caller-visible form
impl From<AccountError> for CallableError {
    #[track_caller]
    fn from(e: AccountError) -> Self {
        let message = e.public_message().to_string();
        let location = ErrorLocation::from(Location::caller());

        match e {
            AccountError::Unauthenticated { .. } => Self::Unauthenticated { message, location },
            AccountError::Internal { .. } => Self::Internal { message, location },
        }
    }
}

pub type Result<T> = std::result::Result<T, CallableError>;
