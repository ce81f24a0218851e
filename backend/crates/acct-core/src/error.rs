use crate::{DeletionStep, INTERNAL_MESSAGE, UNAUTHENTICATED_MESSAGE};

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures reported by document and identity store backends
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Identity account not found: {uid} {location}")]
    IdentityNotFound {
        uid: String,
        location: ErrorLocation,
    },

    #[error("Identity account already exists: {uid} {location}")]
    IdentityExists {
        uid: String,
        location: ErrorLocation,
    },

    #[error("Email already belongs to another identity account: {email} {location}")]
    EmailTaken {
        email: String,
        location: ErrorLocation,
    },

    #[error("Malformed data at {key}: {message} {location}")]
    Malformed {
        key: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Store backend error: {message} {location}")]
    Backend {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn identity_not_found<S: Into<String>>(uid: S) -> Self {
        Self::IdentityNotFound {
            uid: uid.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn backend<S: Into<String>>(message: S) -> Self {
        Self::Backend {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Errors surfaced by the account deletion operation.
///
/// The caller-visible taxonomy is closed: whatever went wrong underneath,
/// a caller only ever sees one of these two kinds with a fixed message.
#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Caller is not authenticated {location}")]
    Unauthenticated { location: ErrorLocation },

    #[error("Account deletion failed at step {step}: {source} {location}")]
    Internal {
        step: DeletionStep,
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl AccountError {
    #[track_caller]
    pub fn unauthenticated() -> Self {
        Self::Unauthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(step: DeletionStep, source: StoreError) -> Self {
        Self::Internal {
            step,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Machine-readable code shown to the caller
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthenticated { .. } => "unauthenticated",
            Self::Internal { .. } => "internal",
        }
    }

    /// Message shown to the caller; never contains backend detail
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::Unauthenticated { .. } => UNAUTHENTICATED_MESSAGE,
            Self::Internal { .. } => INTERNAL_MESSAGE,
        }
    }

    /// Step that failed, if any side effect was attempted
    pub fn failed_step(&self) -> Option<DeletionStep> {
        match self {
            Self::Unauthenticated { .. } => None,
            Self::Internal { step, .. } => Some(*step),
        }
    }
}

pub type StoreResult<T> = StdResult<T, StoreError>;
pub type AccountResult<T> = StdResult<T, AccountError>;
