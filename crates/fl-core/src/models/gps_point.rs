//! GPS track point.

use crate::error::{CoreError, Result as CoreResult};
use crate::loose_number::LooseNumber;
use crate::models::present;
use crate::record::{KindFilter, Record, SortOrder};
use crate::record_id;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;

pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

#[derive(Debug, Clone)]
pub struct GpsPoint {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub date: String,
    pub time: String,
    pub accuracy: Option<f64>,
    pub altitude: Option<f64>,
    pub speed: Option<f64>,
    /// Set when the point came from an uploaded track file.
    pub filename: Option<String>,
    pub user_id: i64,
    pub username: String,
    pub recorded_at: DateTime<Utc>,
}

pub struct GpsPayload {
    pub latitude: Option<LooseNumber>,
    pub longitude: Option<LooseNumber>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub accuracy: Option<LooseNumber>,
    pub altitude: Option<LooseNumber>,
    pub speed: Option<LooseNumber>,
    pub filename: Option<String>,
}

impl GpsPoint {
    const ID_PREFIX: &'static str = "gpx";
    const REQUIRED_FIELDS: &'static str = "latitude, longitude, date, time";

    /// Validate and build a point. Coordinates must parse and fall inside
    /// the WGS84 ranges; boundary values are accepted.
    #[track_caller]
    pub fn new(owner_id: i64, owner_username: &str, payload: GpsPayload) -> CoreResult<Self> {
        let (Some(latitude), Some(longitude), Some(date), Some(time)) = (
            payload.latitude,
            payload.longitude,
            present(payload.date),
            present(payload.time),
        ) else {
            return Err(CoreError::MissingFields {
                fields: Self::REQUIRED_FIELDS,
                location: ErrorLocation::from(Location::caller()),
            });
        };

        let (Some(latitude), Some(longitude)) = (latitude.as_f64(), longitude.as_f64()) else {
            return Err(CoreError::InvalidCoordinates {
                location: ErrorLocation::from(Location::caller()),
            });
        };

        if !(LATITUDE_RANGE.0..=LATITUDE_RANGE.1).contains(&latitude)
            || !(LONGITUDE_RANGE.0..=LONGITUDE_RANGE.1).contains(&longitude)
        {
            return Err(CoreError::InvalidCoordinates {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            id: record_id::generate(Some(Self::ID_PREFIX)),
            latitude,
            longitude,
            date,
            time,
            accuracy: payload.accuracy.and_then(|v| v.as_f64()),
            altitude: payload.altitude.and_then(|v| v.as_f64()),
            speed: payload.speed.and_then(|v| v.as_f64()),
            filename: present(payload.filename),
            user_id: owner_id,
            username: owner_username.to_string(),
            recorded_at: Utc::now(),
        })
    }
}

impl Record for GpsPoint {
    const SORT_ORDER: SortOrder = SortOrder::Ascending;

    fn id(&self) -> &str {
        &self.id
    }

    fn user_id(&self) -> i64 {
        self.user_id
    }

    fn username(&self) -> &str {
        &self.username
    }

    fn date(&self) -> &str {
        &self.date
    }

    fn time(&self) -> &str {
        &self.time
    }

    fn matches_kind_filter(&self, filter: &KindFilter) -> bool {
        match &filter.filename {
            Some(filename) => self.filename.as_deref() == Some(filename.as_str()),
            None => true,
        }
    }
}
