use crate::{AuthError, MAX_UID_LENGTH, Result as AuthErrorResult};

use acct_core::CallerIdentity;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT claims carried by identity-provider ID tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (uid)
    pub sub: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Claims {
    /// The uid must be usable as a document id once the signature checks out
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        let problem = if self.sub.trim().is_empty() {
            "is empty"
        } else if self.sub.len() > MAX_UID_LENGTH {
            "is longer than the maximum uid length"
        } else {
            return Ok(());
        };

        Err(AuthError::InvalidSubject {
            problem,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub fn into_identity(self) -> CallerIdentity {
        let identity = CallerIdentity::new(self.sub);
        match self.email {
            Some(email) => identity.with_email(email),
            None => identity,
        }
    }
}
