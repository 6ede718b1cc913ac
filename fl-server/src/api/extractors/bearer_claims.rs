//! Axum extractors for REST API authentication

use crate::{ApiError, AppState};

use fl_auth::{AuthError, Claims, JwtValidator, Result as AuthErrorResult};

use std::future::Future;
use std::panic::Location;

use axum::http::{HeaderMap, header};
use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;

/// The verified identity behind a `Bearer` token.
///
/// This is the single authorization gate for the record endpoints: every
/// data handler takes it as an argument, and a missing or invalid token
/// rejects with 401 before the handler body runs.
pub struct BearerClaims {
    pub user_id: i64,
    pub claims: Claims,
}

impl FromRequestParts<AppState> for BearerClaims {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let claims = match authenticate(&parts.headers, &state.validator) {
                Ok(claims) => claims,
                Err(e) => {
                    state.metrics.unauthorized();
                    return Err(ApiError::from(e));
                }
            };
            let user_id = claims.user_id().map_err(ApiError::from)?;

            Ok(BearerClaims { user_id, claims })
        }
    }
}

/// Extract and verify the bearer token from a request's headers.
///
/// Shared by the extractor above and the `/auth/verify` handler, which
/// shapes its own response body.
#[track_caller]
pub fn authenticate(headers: &HeaderMap, validator: &JwtValidator) -> AuthErrorResult<Claims> {
    let header = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AuthError::MissingHeader {
            location: ErrorLocation::from(Location::caller()),
        })?;

    let value = header.to_str().map_err(|_| AuthError::InvalidScheme {
        location: ErrorLocation::from(Location::caller()),
    })?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or_else(|| AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        })?;

    validator.validate(token.trim())
}
