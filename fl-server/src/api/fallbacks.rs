//! Preflight and unsupported-method handlers shared across routes.

use crate::ApiError;

use std::panic::Location;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use error_location::ErrorLocation;
use serde_json::json;

/// CORS preflight: always 200 with an empty body, before authentication.
/// The CORS layer decorates the response with the allow-* headers.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// 405 for the record and verify endpoints (`{"error": ...}` shape).
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed {
        location: ErrorLocation::from(Location::caller()),
    }
}

/// 405 for `/auth/login`, which keeps its `{success, message}` shape.
pub async fn login_method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "success": false, "message": "Method not allowed" })),
    )
        .into_response()
}
