use crate::api::fallbacks::{login_method_not_allowed, method_not_allowed, preflight};
use crate::health;
use crate::{
    AppState, create_expense_claim, create_gps_point, create_timesheet_entry, list_expense_claims,
    list_gps_points, list_timesheet_entries, login, verify_token,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Authentication
        .route(
            "/auth/login",
            post(login)
                .options(preflight)
                .fallback(login_method_not_allowed),
        )
        .route(
            "/auth/verify",
            get(verify_token)
                .post(verify_token)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        // Record stores
        .route(
            "/timesheet",
            get(list_timesheet_entries)
                .post(create_timesheet_entry)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/expenses",
            get(list_expense_claims)
                .post(create_expense_claim)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/gpx",
            get(list_gps_points)
                .post(create_gps_point)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics))
        // Add shared state
        .with_state(state)
        // CORS middleware (the PWA calls cross-origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
