pub mod create_timesheet_request;
pub mod timesheet_create_response;
pub mod timesheet_entry_dto;
pub mod timesheet_list_response;
pub mod timesheets;
