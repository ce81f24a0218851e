use serde::Serialize;

/// Success acknowledgment, serialized as `{"success": true}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteAccountResponse {
    pub success: bool,
}

impl DeleteAccountResponse {
    pub fn succeeded() -> Self {
        Self { success: true }
    }
}
