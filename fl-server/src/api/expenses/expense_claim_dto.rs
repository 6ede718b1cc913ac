use fl_core::ExpenseClaim;

use chrono::SecondsFormat;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseClaimDto {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub date: String,
    pub time: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub user_id: i64,
    pub username: String,
    pub timestamp: String,
    pub currency: String,
    pub category: String,
    pub receipt: Option<String>,
}

impl From<ExpenseClaim> for ExpenseClaimDto {
    fn from(claim: ExpenseClaim) -> Self {
        Self {
            id: claim.id,
            description: claim.description,
            amount: claim.amount,
            date: claim.date,
            time: claim.time,
            latitude: claim.latitude,
            longitude: claim.longitude,
            user_id: claim.user_id,
            username: claim.username,
            timestamp: claim
                .recorded_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            currency: claim.currency,
            category: claim.category,
            receipt: claim.receipt,
        }
    }
}
