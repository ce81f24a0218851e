/// Verified "who is calling" assertion attached to a request.
///
/// Only the authentication layer builds these, from a token whose signature
/// and expiry have already been checked. Handlers must take the uid from here
/// and never from request payload data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    uid: String,
    email: Option<String>,
}

impl CallerIdentity {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}
