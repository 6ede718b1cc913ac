use crate::VerifiedUserDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<VerifiedUserDto>,
    pub message: String,
}

impl VerifyResponse {
    pub fn invalid<S: Into<String>>(message: S) -> Self {
        Self {
            valid: false,
            user: None,
            message: message.into(),
        }
    }
}
