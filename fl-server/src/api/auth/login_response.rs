use crate::UserDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
    pub message: String,
}

impl LoginResponse {
    pub fn failure<S: Into<String>>(message: S) -> Self {
        Self {
            success: false,
            token: None,
            user: None,
            message: message.into(),
        }
    }
}
