use crate::ExpenseRecordView;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ExpenseCreateResponse {
    pub success: bool,
    pub id: String,
    pub amount: f64,
    pub message: String,
    pub record: ExpenseRecordView,
}
