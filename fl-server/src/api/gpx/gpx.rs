//! GPS track REST API handlers

use crate::{
    ApiError, ApiResult, AppState, BearerClaims, CreateGpsPointRequest, GpsPointDto,
    GpxCreateResponse, GpxListResponse, ListQuery,
};

use fl_core::GpsPoint;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use log::{debug, info};

// =============================================================================
// Handlers
// =============================================================================

/// POST /gpx
///
/// Validate and append one GPS point. The response intentionally omits
/// the stored record; points are high-volume and the client only needs
/// the id.
pub async fn create_gps_point(
    State(state): State<AppState>,
    caller: BearerClaims,
    body: Result<Json<CreateGpsPointRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<GpxCreateResponse>)> {
    let Json(request) = body.map_err(|_| ApiError::bad_request("Invalid JSON body"))?;

    let point = GpsPoint::new(caller.user_id, &caller.claims.username, request.into())?;

    let record = state.gps_points.append(point)?;
    state.metrics.record_appended("gpx");
    // No coordinates in the log line
    info!(
        "GPS point recorded: {} - {} - {} {}",
        record.id, record.username, record.date, record.time
    );

    Ok((
        StatusCode::CREATED,
        Json(GpxCreateResponse {
            success: true,
            id: record.id,
            message: "GPS point recorded successfully".to_string(),
        }),
    ))
}

/// GET /gpx
///
/// The caller's points oldest first, capped at `limit` (default from
/// configuration) so a long track cannot blow up the response.
pub async fn list_gps_points(
    State(state): State<AppState>,
    caller: BearerClaims,
    Query(params): Query<ListQuery>,
) -> ApiResult<Json<GpxListResponse>> {
    let query = params.to_record_query(&caller, Some(state.query.gps_point_limit));
    let outcome = state.gps_points.query(&query)?;

    state.metrics.records_queried("gpx");
    debug!(
        "GPX records retrieved: {} points for {}",
        outcome.records.len(),
        caller.claims.username
    );

    Ok(Json(GpxListResponse {
        success: true,
        count: outcome.records.len(),
        data: outcome.records.into_iter().map(GpsPointDto::from).collect(),
        user: caller.claims.username,
        limited: outcome.limited,
    }))
}
