use std::fmt;

/// The ordered steps of an account deletion.
///
/// Only used server-side to say where a failure happened; callers always
/// see the same internal error whichever step failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionStep {
    ProfileRecord,
    IdentityAccount,
}

impl DeletionStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProfileRecord => "profile_record",
            Self::IdentityAccount => "identity_account",
        }
    }
}

impl fmt::Display for DeletionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
