//! Timesheet REST API handlers

use crate::{
    ApiError, ApiResult, AppState, BearerClaims, CreateTimesheetRequest, ListQuery,
    TimesheetCreateResponse, TimesheetEntryDto, TimesheetListResponse,
};

use fl_core::TimesheetEntry;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use log::{debug, info};

// =============================================================================
// Handlers
// =============================================================================

/// POST /timesheet
///
/// Validate and append one timesheet entry, stamped with the caller's
/// identity.
pub async fn create_timesheet_entry(
    State(state): State<AppState>,
    caller: BearerClaims,
    body: Result<Json<CreateTimesheetRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TimesheetCreateResponse>)> {
    let Json(request) = body.map_err(|_| ApiError::bad_request("Invalid JSON body"))?;

    let entry = TimesheetEntry::new(
        caller.user_id,
        &caller.claims.username,
        request.date,
        request.time,
        request.description,
    )?;

    let record = state.timesheet_entries.append(entry)?;
    state.metrics.record_appended("timesheet");
    info!(
        "Timesheet record created: {} - {}",
        record.id, record.username
    );

    Ok((
        StatusCode::CREATED,
        Json(TimesheetCreateResponse {
            success: true,
            id: record.id.clone(),
            message: "Timesheet record created successfully".to_string(),
            record: TimesheetEntryDto::from(record),
        }),
    ))
}

/// GET /timesheet
///
/// The caller's entries (or, for an elevated caller with `user=`, that
/// user's), newest first.
pub async fn list_timesheet_entries(
    State(state): State<AppState>,
    caller: BearerClaims,
    Query(params): Query<ListQuery>,
) -> ApiResult<Json<TimesheetListResponse>> {
    let query = params.to_record_query(&caller, None);
    let outcome = state.timesheet_entries.query(&query)?;

    state.metrics.records_queried("timesheet");
    debug!(
        "Timesheet records retrieved: {} records for {}",
        outcome.records.len(),
        caller.claims.username
    );

    Ok(Json(TimesheetListResponse {
        success: true,
        count: outcome.records.len(),
        data: outcome
            .records
            .into_iter()
            .map(TimesheetEntryDto::from)
            .collect(),
        user: caller.claims.username,
    }))
}
