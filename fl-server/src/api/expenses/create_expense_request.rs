use fl_core::LooseNumber;
use fl_core::models::expense_claim::ExpensePayload;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateExpenseRequest {
    pub description: Option<String>,
    pub amount: Option<LooseNumber>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub category: Option<String>,
    pub latitude: Option<LooseNumber>,
    pub longitude: Option<LooseNumber>,
    pub receipt: Option<String>,
}

impl From<CreateExpenseRequest> for ExpensePayload {
    fn from(request: CreateExpenseRequest) -> Self {
        Self {
            description: request.description,
            amount: request.amount,
            date: request.date,
            time: request.time,
            category: request.category,
            latitude: request.latitude,
            longitude: request.longitude,
            receipt: request.receipt,
        }
    }
}
