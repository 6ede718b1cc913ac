use crate::GpsPointDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GpxListResponse {
    pub success: bool,
    pub data: Vec<GpsPointDto>,
    pub count: usize,
    pub user: String,
    /// True when the result was cut at the query limit.
    pub limited: bool,
}
