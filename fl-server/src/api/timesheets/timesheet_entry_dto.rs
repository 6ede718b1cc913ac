use fl_core::TimesheetEntry;

use chrono::SecondsFormat;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetEntryDto {
    pub id: String,
    pub date: String,
    pub time: String,
    pub description: String,
    pub user_id: i64,
    pub username: String,
    /// Server-assigned, RFC 3339 with milliseconds.
    pub timestamp: String,
}

impl From<TimesheetEntry> for TimesheetEntryDto {
    fn from(entry: TimesheetEntry) -> Self {
        Self {
            id: entry.id,
            date: entry.date,
            time: entry.time,
            description: entry.description,
            user_id: entry.user_id,
            username: entry.username,
            timestamp: entry
                .recorded_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
