
use fl_core::models::expense_claim::ExpensePayload;
use fl_core::models::gps_point::GpsPayload;
use fl_core::{ExpenseClaim, GpsPoint, TimesheetEntry};

pub(crate) fn entry(user_id: i64, username: &str, date: &str, time: &str) -> TimesheetEntry {
    TimesheetEntry::new(
        user_id,
        username,
        Some(date.to_string()),
        Some(time.to_string()),
        Some(format!("work on {date}")),
    )
    .unwrap()
}

pub(crate) fn point(user_id: i64, username: &str, date: &str, time: &str) -> GpsPoint {
    GpsPoint::new(
        user_id,
        username,
        GpsPayload {
            latitude: Some(41.0.into()),
            longitude: Some(2.0.into()),
            date: Some(date.to_string()),
            time: Some(time.to_string()),
            accuracy: None,
            altitude: None,
            speed: None,
            filename: None,
        },
    )
    .unwrap()
}

pub(crate) fn claim(
    user_id: i64,
    username: &str,
    date: &str,
    amount: f64,
    category: Option<&str>,
) -> ExpenseClaim {
    ExpenseClaim::new(
        user_id,
        username,
        ExpensePayload {
            description: Some(format!("expense on {date}")),
            amount: Some(amount.into()),
            date: Some(date.to_string()),
            time: Some("12:00".to_string()),
            category: category.map(str::to_string),
            latitude: None,
            longitude: None,
            receipt: None,
        },
    )
    .unwrap()
}
