use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity-provider record that lets a user sign in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityAccount {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub disabled: bool,
    pub created_at: DateTime<Utc>,
}

impl IdentityAccount {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: None,
            display_name: None,
            disabled: false,
            created_at: Utc::now(),
        }
    }
}
