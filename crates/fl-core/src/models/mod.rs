pub mod expense_claim;
pub mod gps_point;
pub mod timesheet_entry;
pub mod user;

/// Treat absent and empty strings the same way; a blank field was not
/// submitted.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
