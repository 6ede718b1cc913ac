mod expense_claim;
mod gps_point;
mod timesheet_entry;
