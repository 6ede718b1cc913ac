use fl_auth::Claims;

use serde::Serialize;

/// Identity echoed back by `/auth/verify`: exactly the claims carried in
/// the token, nothing refreshed from the directory.
#[derive(Debug, Serialize)]
pub struct VerifiedUserDto {
    pub id: i64,
    pub username: String,
    pub position: String,
}

impl VerifiedUserDto {
    pub fn new(user_id: i64, claims: Claims) -> Self {
        Self {
            id: user_id,
            username: claims.username,
            position: claims.position,
        }
    }
}
