use crate::TimesheetEntryDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TimesheetCreateResponse {
    pub success: bool,
    pub id: String,
    pub message: String,
    pub record: TimesheetEntryDto,
}
