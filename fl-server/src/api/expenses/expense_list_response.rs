use crate::ExpenseClaimDto;

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseListResponse {
    pub success: bool,
    pub data: Vec<ExpenseClaimDto>,
    pub count: usize,
    /// Sum over the returned set, rounded to 2 decimals.
    pub total_amount: f64,
    /// `YYYY-MM` -> summed amount.
    pub monthly_totals: BTreeMap<String, f64>,
    pub user: String,
    pub currency: String,
}
