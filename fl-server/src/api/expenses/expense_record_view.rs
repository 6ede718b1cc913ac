use fl_core::ExpenseClaim;

use serde::Serialize;

/// Trimmed record view returned on create: enough for the client to show
/// a confirmation without shipping the whole claim back.
#[derive(Debug, Serialize)]
pub struct ExpenseRecordView {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub date: String,
    pub time: String,
}

impl From<&ExpenseClaim> for ExpenseRecordView {
    fn from(claim: &ExpenseClaim) -> Self {
        Self {
            id: claim.id.clone(),
            description: claim.description.clone(),
            amount: claim.amount,
            date: claim.date.clone(),
            time: claim.time.clone(),
        }
    }
}
