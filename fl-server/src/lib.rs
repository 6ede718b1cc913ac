pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;

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
