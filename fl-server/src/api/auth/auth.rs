//! Login and token verification handlers.
//!
//! These two endpoints keep their own response shapes (`{success, ...}`
//! and `{valid, ...}`) instead of the record endpoints' `{error}` bodies;
//! the PWA front-end matches on them.

use crate::api::extractors::bearer_claims::authenticate;
use crate::{AppState, LoginRequest, LoginResponse, UserDto, VerifiedUserDto, VerifyResponse};

use fl_auth::AuthError;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use log::{info, warn};

/// POST /auth/login
///
/// Check a username/password pair against the user directory and issue a
/// session token.
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = body else {
        return (
            StatusCode::BAD_REQUEST,
            Json(LoginResponse::failure("Invalid request body")),
        )
            .into_response();
    };

    let (Some(username), Some(password)) = (request.username, request.password) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(LoginResponse::failure("Username and password are required")),
        )
            .into_response();
    };
    if username.is_empty() || password.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(LoginResponse::failure("Username and password are required")),
        )
            .into_response();
    }

    let user = match state.directory.authenticate(&username, &password) {
        Ok(user) => user,
        Err(e) => {
            // Uniform rejection; never reveal whether the username exists
            log::debug!("Login rejected for '{}': {}", username, e);
            state.metrics.login_rejected();
            return (
                StatusCode::UNAUTHORIZED,
                Json(LoginResponse::failure("Invalid credentials")),
            )
                .into_response();
        }
    };

    let token = match state.issuer.issue(&user) {
        Ok(token) => token,
        Err(e) => {
            log::error!("Token issuance failed: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(LoginResponse::failure("Internal server error")),
            )
                .into_response();
        }
    };

    state.metrics.login_succeeded();
    info!("Login successful: {}", user.username);

    (
        StatusCode::OK,
        Json(LoginResponse {
            success: true,
            token: Some(token),
            user: Some(UserDto::from(user)),
            message: "Login successful".to_string(),
        }),
    )
        .into_response()
}

/// POST/GET /auth/verify
///
/// Validate the presented bearer token and echo the identity it carries.
pub async fn verify_token(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let claims = match authenticate(&headers, &state.validator) {
        Ok(claims) => claims,
        Err(AuthError::MissingHeader { .. }) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(VerifyResponse::invalid("No token provided")),
            )
                .into_response();
        }
        Err(e) => {
            warn!("Token verification failed: {}", e);
            state.metrics.unauthorized();
            return (
                StatusCode::UNAUTHORIZED,
                Json(VerifyResponse::invalid("Invalid or expired token")),
            )
                .into_response();
        }
    };

    let user_id = match claims.user_id() {
        Ok(user_id) => user_id,
        Err(e) => {
            warn!("Token verification failed: {}", e);
            return (
                StatusCode::UNAUTHORIZED,
                Json(VerifyResponse::invalid("Invalid or expired token")),
            )
                .into_response();
        }
    };

    (
        StatusCode::OK,
        Json(VerifyResponse {
            valid: true,
            user: Some(VerifiedUserDto::new(user_id, claims)),
            message: "Token is valid".to_string(),
        }),
    )
        .into_response()
}
