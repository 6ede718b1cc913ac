use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Position value that widens query scope to other users' records.
///
/// None of the seeded positions carries this value today; the branch is
/// kept because the API contract defines it.
pub const ELEVATED_POSITION: &str = "admin";

/// JWT claims embedded in every session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id, stringified)
    pub sub: String,
    pub username: String,
    pub position: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.sub.parse::<i64>().is_err() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub must be a numeric user id".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.username.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "username".to_string(),
                message: "username cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Numeric user id carried in `sub`.
    #[track_caller]
    pub fn user_id(&self) -> AuthErrorResult<i64> {
        self.sub.parse().map_err(|_| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: "sub must be a numeric user id".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Whether this caller may query other users' records.
    pub fn is_elevated(&self) -> bool {
        self.position == ELEVATED_POSITION
    }
}
