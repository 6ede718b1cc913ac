//! Timesheet entry - one logged unit of work.

use crate::error::{CoreError, Result as CoreResult};
use crate::models::present;
use crate::record::{KindFilter, Record, SortOrder};
use crate::record_id;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;

#[derive(Debug, Clone)]
pub struct TimesheetEntry {
    pub id: String,
    pub date: String,
    pub time: String,
    pub description: String,
    pub user_id: i64,
    pub username: String,
    pub recorded_at: DateTime<Utc>,
}

impl TimesheetEntry {
    const REQUIRED_FIELDS: &'static str = "date, time, description";

    /// Validate and build an entry, stamping owner identity and the server
    /// timestamp. Owner fields never change after this point.
    #[track_caller]
    pub fn new(
        owner_id: i64,
        owner_username: &str,
        date: Option<String>,
        time: Option<String>,
        description: Option<String>,
    ) -> CoreResult<Self> {
        let (Some(date), Some(time), Some(description)) =
            (present(date), present(time), present(description))
        else {
            return Err(CoreError::MissingFields {
                fields: Self::REQUIRED_FIELDS,
                location: ErrorLocation::from(Location::caller()),
            });
        };

        Ok(Self {
            id: record_id::generate(None),
            date,
            time,
            description,
            user_id: owner_id,
            username: owner_username.to_string(),
            recorded_at: Utc::now(),
        })
    }
}

impl Record for TimesheetEntry {
    const SORT_ORDER: SortOrder = SortOrder::Descending;

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

    fn matches_kind_filter(&self, _filter: &KindFilter) -> bool {
        true
    }
}
