use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateTimesheetRequest {
    pub date: Option<String>,
    pub time: Option<String>,
    pub description: Option<String>,
}
