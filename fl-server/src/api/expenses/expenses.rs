//! Expense REST API handlers

use crate::{
    ApiError, ApiResult, AppState, BearerClaims, CreateExpenseRequest, ExpenseClaimDto,
    ExpenseCreateResponse, ExpenseListResponse, ExpenseRecordView, ListQuery,
};

use fl_core::ExpenseClaim;
use fl_store::ExpenseTotals;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use log::{debug, info};

// =============================================================================
// Handlers
// =============================================================================

/// POST /expenses
///
/// Validate and append one expense claim, stamped with the caller's
/// identity.
pub async fn create_expense_claim(
    State(state): State<AppState>,
    caller: BearerClaims,
    body: Result<Json<CreateExpenseRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ExpenseCreateResponse>)> {
    let Json(request) = body.map_err(|_| ApiError::bad_request("Invalid JSON body"))?;

    let claim = ExpenseClaim::new(caller.user_id, &caller.claims.username, request.into())?;

    let record = state.expense_claims.append(claim)?;
    state.metrics.record_appended("expense");
    info!(
        "Expense recorded: {} - {} - {} {}",
        record.id, record.username, record.amount, record.currency
    );

    Ok((
        StatusCode::CREATED,
        Json(ExpenseCreateResponse {
            success: true,
            id: record.id.clone(),
            amount: record.amount,
            message: "Expense recorded successfully".to_string(),
            record: ExpenseRecordView::from(&record),
        }),
    ))
}

/// GET /expenses
///
/// The caller's claims newest first, with the running total and per-month
/// sums computed over the same filtered set.
pub async fn list_expense_claims(
    State(state): State<AppState>,
    caller: BearerClaims,
    Query(params): Query<ListQuery>,
) -> ApiResult<Json<ExpenseListResponse>> {
    let query = params.to_record_query(&caller, None);
    let outcome = state.expense_claims.query(&query)?;

    let totals = ExpenseTotals::of(&outcome.records);

    state.metrics.records_queried("expense");
    debug!(
        "Expense records retrieved: {} records for {} - total {}",
        outcome.records.len(),
        caller.claims.username,
        totals.total_amount
    );

    Ok(Json(ExpenseListResponse {
        success: true,
        count: outcome.records.len(),
        data: outcome
            .records
            .into_iter()
            .map(ExpenseClaimDto::from)
            .collect(),
        total_amount: totals.total_amount,
        monthly_totals: totals.monthly_totals,
        user: caller.claims.username,
        currency: ExpenseClaim::CURRENCY.to_string(),
    }))
}
