use crate::{AuthError, Claims, Result as AuthErrorResult};

use fl_core::User;

use std::panic::Location;

use chrono::{Duration, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Signs session tokens for authenticated users.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create issuer with HS256 (symmetric secret) and a token lifetime in
    /// days.
    pub fn with_hs256(secret: &[u8], ttl_days: u32) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl: Duration::days(i64::from(ttl_days)),
        }
    }

    /// Issue a signed token embedding the user's identity and position.
    #[track_caller]
    pub fn issue(&self, user: &User) -> AuthErrorResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            position: user.position.clone(),
            exp: (now + self.ttl).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
