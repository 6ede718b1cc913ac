#![allow(dead_code)]

//! Test infrastructure for fl-server API tests

use fl_auth::{JwtValidator, StaticUserDirectory, TokenIssuer, hash_password};
use fl_core::{ExpenseClaim, GpsPoint, TimesheetEntry, User};
use fl_server::{AppState, Metrics, build_router};
use fl_store::MemoryStore;

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"integration-test-secret-32-bytes!";

pub fn test_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            username: "juan_perez".to_string(),
            password_hash: hash_password("password123").unwrap(),
            complete_name: "Juan Pérez".to_string(),
            position: "Driver".to_string(),
            phone_number: "+34123456789".to_string(),
            active: true,
        },
        User {
            id: 2,
            username: "maria_garcia".to_string(),
            password_hash: hash_password("password456").unwrap(),
            complete_name: "María García".to_string(),
            position: "Engineer".to_string(),
            phone_number: "+34987654321".to_string(),
            active: true,
        },
        User {
            id: 3,
            username: "site_admin".to_string(),
            password_hash: hash_password("admin2025").unwrap(),
            complete_name: "Site Admin".to_string(),
            position: "admin".to_string(),
            phone_number: "+34555123456".to_string(),
            active: true,
        },
        User {
            id: 4,
            username: "carlos_lopez".to_string(),
            password_hash: hash_password("carlos2025").unwrap(),
            complete_name: "Carlos López".to_string(),
            position: "Driver".to_string(),
            phone_number: "+34666789123".to_string(),
            active: false,
        },
    ]
}

/// Create AppState for testing
pub fn create_test_app_state() -> AppState {
    let directory = StaticUserDirectory::new(test_users());
    let issuer = TokenIssuer::with_hs256(TEST_SECRET, 30);
    let validator = JwtValidator::with_hs256(TEST_SECRET);

    AppState {
        directory: Arc::new(directory),
        issuer: Arc::new(issuer),
        validator: Arc::new(validator),
        timesheet_entries: Arc::new(MemoryStore::<TimesheetEntry>::new()),
        gps_points: Arc::new(MemoryStore::<GpsPoint>::new()),
        expense_claims: Arc::new(MemoryStore::<ExpenseClaim>::new()),
        query: fl_config::QueryConfig::default(),
        metrics: Metrics::new(),
        prometheus: None,
    }
}

/// Bearer header value for a seeded user
pub fn auth_header(state: &AppState, username: &str) -> String {
    let users = test_users();
    let user = users
        .iter()
        .find(|u| u.username == username)
        .expect("unknown test user");
    format!("Bearer {}", state.issuer.issue(user).unwrap())
}

/// Send a request and decode the JSON response body
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    bearer: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(bearer) = bearer {
        builder = builder.header(header::AUTHORIZATION, bearer);
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Build a router over a fresh test state
pub fn test_app() -> (AppState, Router) {
    let state = create_test_app_state();
    let app = build_router(state.clone());
    (state, app)
}
