use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Why a request's ID token could not be turned into a caller identity
#[derive(Error, Debug)]
pub enum AuthError {
    /// No Authorization header, or a bearer header with nothing after it
    #[error("No ID token presented {location}")]
    MissingToken { location: ErrorLocation },

    #[error("Authorization header is not a Bearer credential {location}")]
    NotBearer { location: ErrorLocation },

    #[error("ID token expired {location}")]
    Expired { location: ErrorLocation },

    /// Bad signature, wrong issuer or audience, or not a JWT at all
    #[error("ID token rejected: {source} {location}")]
    Rejected {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("ID token subject {problem} {location}")]
    InvalidSubject {
        problem: &'static str,
        location: ErrorLocation,
    },

    /// Startup only: the configured public key cannot verify anything
    #[error("Unusable token verification key: {source} {location}")]
    VerificationKey {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn missing_token() -> Self {
        Self::MissingToken {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_bearer() -> Self {
        Self::NotBearer {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Short label for log lines and counters
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MissingToken { .. } => "missing_token",
            Self::NotBearer { .. } => "not_bearer",
            Self::Expired { .. } => "expired",
            Self::Rejected { .. } => "rejected",
            Self::InvalidSubject { .. } => "invalid_subject",
            Self::VerificationKey { .. } => "verification_key",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
