//! REST API error types
//!
//! These errors are recovered at the gateway boundary and mapped to the
//! flat `{"error": "..."}` JSON bodies the PWA front-end expects. Internal
//! detail (and error locations) go to the log, never to the client.

use fl_auth::AuthError;
use fl_core::CoreError;
use fl_store::StoreError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde_json::json;
use thiserror::Error;

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed body or failed field validation (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Missing, malformed or expired bearer token (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Method not supported on this endpoint (405)
    #[error("Method not allowed {location}")]
    MethodNotAllowed { location: ErrorLocation },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, message) = match self {
            ApiError::BadRequest { message, .. } => (StatusCode::BAD_REQUEST, message),
            ApiError::Unauthorized { message, .. } => (StatusCode::UNAUTHORIZED, message),
            ApiError::MethodNotAllowed { .. } => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".into())
            }
            // Never echo internal detail to the client
            ApiError::Internal { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".into())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Convert validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let message = match &e {
            CoreError::MissingFields { fields, .. } => {
                format!("Missing required fields: {fields}")
            }
            CoreError::InvalidCoordinates { .. } => "Invalid GPS coordinates".to_string(),
            CoreError::InvalidAmount { min, max, .. } => {
                format!("Invalid amount. Must be between {min} and {max} euros")
            }
            CoreError::DescriptionLength { min, max, .. } => {
                format!("Description must be between {min} and {max} characters")
            }
        };

        ApiError::BadRequest {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert token failures to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        log::debug!("Bearer authentication failed: {}", e);
        ApiError::Unauthorized {
            message: "Unauthorized - Invalid token".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert store failures to API errors
impl From<StoreError> for ApiError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        log::error!("Record store error: {}", e);
        ApiError::Internal {
            message: "Record store operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
