use fl_core::LooseNumber;
use fl_core::models::gps_point::GpsPayload;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateGpsPointRequest {
    pub latitude: Option<LooseNumber>,
    pub longitude: Option<LooseNumber>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub accuracy: Option<LooseNumber>,
    pub altitude: Option<LooseNumber>,
    pub speed: Option<LooseNumber>,
    pub filename: Option<String>,
}

impl From<CreateGpsPointRequest> for GpsPayload {
    fn from(request: CreateGpsPointRequest) -> Self {
        Self {
            latitude: request.latitude,
            longitude: request.longitude,
            date: request.date,
            time: request.time,
            accuracy: request.accuracy,
            altitude: request.altitude,
            speed: request.speed,
            filename: request.filename,
        }
    }
}
