use crate::TimesheetEntryDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TimesheetListResponse {
    pub success: bool,
    pub data: Vec<TimesheetEntryDto>,
    pub count: usize,
    /// Username the result set belongs to.
    pub user: String,
}
