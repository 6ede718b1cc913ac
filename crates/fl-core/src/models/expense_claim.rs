//! Expense claim.

use crate::error::{CoreError, Result as CoreResult};
use crate::loose_number::LooseNumber;
use crate::models::present;
use crate::record::{KindFilter, Record, SortOrder};
use crate::record_id;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;

pub const AMOUNT_RANGE: (f64, f64) = (0.0, 10_000.0);
pub const DESCRIPTION_LENGTH: (usize, usize) = (3, 200);

#[derive(Debug, Clone)]
pub struct ExpenseClaim {
    pub id: String,
    /// Trimmed at validation time.
    pub description: String,
    pub amount: f64,
    pub currency: String,
    pub category: String,
    pub date: String,
    pub time: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub receipt: Option<String>,
    pub user_id: i64,
    pub username: String,
    pub recorded_at: DateTime<Utc>,
}

pub struct ExpensePayload {
    pub description: Option<String>,
    pub amount: Option<LooseNumber>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub category: Option<String>,
    pub latitude: Option<LooseNumber>,
    pub longitude: Option<LooseNumber>,
    pub receipt: Option<String>,
}

impl ExpenseClaim {
    pub const CURRENCY: &'static str = "EUR";
    pub const DEFAULT_CATEGORY: &'static str = "General";
    const ID_PREFIX: &'static str = "exp";
    const REQUIRED_FIELDS: &'static str = "description, amount, date, time";

    /// Validate and build a claim. The amount must resolve to a
    /// non-negative number within the claim cap; the description length is
    /// checked after trimming.
    #[track_caller]
    pub fn new(owner_id: i64, owner_username: &str, payload: ExpensePayload) -> CoreResult<Self> {
        let (Some(description), Some(amount), Some(date), Some(time)) = (
            present(payload.description),
            payload.amount,
            present(payload.date),
            present(payload.time),
        ) else {
            return Err(CoreError::MissingFields {
                fields: Self::REQUIRED_FIELDS,
                location: ErrorLocation::from(Location::caller()),
            });
        };

        let amount = match amount.as_f64() {
            Some(amount) if (AMOUNT_RANGE.0..=AMOUNT_RANGE.1).contains(&amount) => amount,
            _ => {
                return Err(CoreError::InvalidAmount {
                    min: AMOUNT_RANGE.0,
                    max: AMOUNT_RANGE.1,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        let description = description.trim().to_string();
        let length = description.chars().count();
        if length < DESCRIPTION_LENGTH.0 || length > DESCRIPTION_LENGTH.1 {
            return Err(CoreError::DescriptionLength {
                min: DESCRIPTION_LENGTH.0,
                max: DESCRIPTION_LENGTH.1,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            id: record_id::generate(Some(Self::ID_PREFIX)),
            description,
            amount,
            currency: Self::CURRENCY.to_string(),
            category: present(payload.category)
                .unwrap_or_else(|| Self::DEFAULT_CATEGORY.to_string()),
            date,
            time,
            latitude: payload.latitude.and_then(|v| v.as_f64()),
            longitude: payload.longitude.and_then(|v| v.as_f64()),
            receipt: present(payload.receipt),
            user_id: owner_id,
            username: owner_username.to_string(),
            recorded_at: Utc::now(),
        })
    }
}

impl Record for ExpenseClaim {
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

    fn matches_kind_filter(&self, filter: &KindFilter) -> bool {
        match &filter.category {
            Some(category) => self.category == *category,
            None => true,
        }
    }
}
