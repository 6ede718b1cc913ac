use fl_core::User;

use serde::Serialize;

/// Public view of a directory user. The credential hash never leaves the
/// directory.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub complete_name: String,
    pub position: String,
    pub phone_number: String,
    pub active: bool,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            complete_name: user.complete_name,
            position: user.position,
            phone_number: user.phone_number,
            active: user.active,
        }
    }
}
