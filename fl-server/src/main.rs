pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, verify_token},
        login_request::LoginRequest,
        login_response::LoginResponse,
        user_dto::UserDto,
        verified_user_dto::VerifiedUserDto,
        verify_response::VerifyResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    expenses::{
        create_expense_request::CreateExpenseRequest,
        expense_claim_dto::ExpenseClaimDto,
        expense_create_response::ExpenseCreateResponse,
        expense_list_response::ExpenseListResponse,
        expense_record_view::ExpenseRecordView,
        expenses::{create_expense_claim, list_expense_claims},
    },
    extractors::bearer_claims::BearerClaims,
    gpx::{
        create_gps_point_request::CreateGpsPointRequest,
        gps_point_dto::GpsPointDto,
        gpx::{create_gps_point, list_gps_points},
        gpx_create_response::GpxCreateResponse,
        gpx_list_response::GpxListResponse,
    },
    list_query::ListQuery,
    timesheets::{
        create_timesheet_request::CreateTimesheetRequest,
        timesheet_create_response::TimesheetCreateResponse,
        timesheet_entry_dto::TimesheetEntryDto,
        timesheet_list_response::TimesheetListResponse,
        timesheets::{create_timesheet_entry, list_timesheet_entries},
    },
};

pub use crate::app_state::AppState;
pub use crate::metrics::Metrics;
pub use crate::routes::build_router;

use fl_auth::{JwtValidator, StaticUserDirectory, TokenIssuer};
use fl_core::{ExpenseClaim, GpsPoint, TimesheetEntry};
use fl_store::MemoryStore;

use std::error::Error;
use std::sync::Arc;

use log::{info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // Load and validate configuration. Validation fails closed: no
    // signing secret or user directory means no server.
    let config = fl_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = fl_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting fl-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Load the user directory
    let users_path = config.users_path()?;
    let directory = StaticUserDirectory::load(&users_path)?;
    if directory.is_empty() {
        warn!("User directory is empty - no login can succeed");
    }

    // Token service. validate() guarantees the secret is present.
    let Some(ref secret) = config.auth.jwt_secret else {
        unreachable!("validate() ensures auth.jwt_secret is set")
    };
    let issuer = TokenIssuer::with_hs256(secret.as_bytes(), config.auth.token_ttl_days);
    let validator = JwtValidator::with_hs256(secret.as_bytes());

    // Prometheus recorder for the /metrics endpoint
    let prometheus = PrometheusBuilder::new().install_recorder()?;

    // Record stores. In-memory and volatile: every process start begins
    // with empty stores.
    let app_state = AppState {
        directory: Arc::new(directory),
        issuer: Arc::new(issuer),
        validator: Arc::new(validator),
        timesheet_entries: Arc::new(MemoryStore::<TimesheetEntry>::new()),
        gps_points: Arc::new(MemoryStore::<GpsPoint>::new()),
        expense_claims: Arc::new(MemoryStore::<ExpenseClaim>::new()),
        query: config.query.clone(),
        metrics: Metrics::new(),
        prometheus: Some(prometheus),
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on Ctrl+C
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => warn!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
