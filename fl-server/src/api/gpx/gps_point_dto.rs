use fl_core::GpsPoint;

use chrono::SecondsFormat;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GpsPointDto {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub date: String,
    pub time: String,
    pub accuracy: Option<f64>,
    pub altitude: Option<f64>,
    pub speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub user_id: i64,
    pub username: String,
    pub timestamp: String,
}

impl From<GpsPoint> for GpsPointDto {
    fn from(point: GpsPoint) -> Self {
        Self {
            id: point.id,
            latitude: point.latitude,
            longitude: point.longitude,
            date: point.date,
            time: point.time,
            accuracy: point.accuracy,
            altitude: point.altitude,
            speed: point.speed,
            filename: point.filename,
            user_id: point.user_id,
            username: point.username,
            timestamp: point
                .recorded_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
