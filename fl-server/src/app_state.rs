use crate::metrics::Metrics;

use fl_auth::{JwtValidator, TokenIssuer, UserDirectory};
use fl_config::QueryConfig;
use fl_core::{ExpenseClaim, GpsPoint, TimesheetEntry};
use fl_store::RecordStore;

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

/// Shared state handed to every handler.
///
/// Storage and authentication are injected behind trait objects; no
/// handler owns module-level state, so tests can assemble a state with
/// doubles and a persistent store can replace the in-memory one.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn UserDirectory>,
    pub issuer: Arc<TokenIssuer>,
    pub validator: Arc<JwtValidator>,
    pub timesheet_entries: Arc<dyn RecordStore<TimesheetEntry>>,
    pub gps_points: Arc<dyn RecordStore<GpsPoint>>,
    pub expense_claims: Arc<dyn RecordStore<ExpenseClaim>>,
    pub query: QueryConfig,
    pub metrics: Metrics,
    /// Present in production; `None` in tests, where no global recorder
    /// is installed.
    pub prometheus: Option<PrometheusHandle>,
}
