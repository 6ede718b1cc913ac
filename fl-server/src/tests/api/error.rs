use crate::ApiError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_bad_request_returns_400_with_flat_error_body() {
    let error = ApiError::bad_request("Missing required fields: date, time, description");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(
        json["error"],
        "Missing required fields: date, time, description"
    );
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let error = ApiError::Unauthorized {
        message: "Unauthorized - Invalid token".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "Unauthorized - Invalid token");
}

#[tokio::test]
async fn test_method_not_allowed_returns_405() {
    let error = ApiError::MethodNotAllowed {
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "Method not allowed");
}

#[tokio::test]
async fn test_internal_error_never_echoes_detail() {
    let error = ApiError::Internal {
        message: "store exploded at memory_store.rs:42".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "Internal server error");
}

#[test]
fn test_validation_error_converts_to_bad_request_message() {
    let core_err = fl_core::TimesheetEntry::new(1, "juan_perez", None, None, None).unwrap_err();
    let api_err: ApiError = core_err.into();

    match api_err {
        ApiError::BadRequest { message, .. } => {
            assert_eq!(message, "Missing required fields: date, time, description");
        }
        _ => panic!("Expected BadRequest error"),
    }
}
