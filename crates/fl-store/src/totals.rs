use fl_core::ExpenseClaim;

use std::collections::BTreeMap;

/// Aggregates computed over an expense query result.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseTotals {
    /// Sum over the filtered set, rounded to 2 decimals.
    pub total_amount: f64,
    /// `YYYY-MM` -> summed amount.
    pub monthly_totals: BTreeMap<String, f64>,
}

impl ExpenseTotals {
    pub fn of(claims: &[ExpenseClaim]) -> Self {
        let total: f64 = claims.iter().map(|claim| claim.amount).sum();

        let mut monthly_totals: BTreeMap<String, f64> = BTreeMap::new();
        for claim in claims {
            let month_key: String = claim.date.chars().take(7).collect();
            *monthly_totals.entry(month_key).or_insert(0.0) += claim.amount;
        }

        Self {
            total_amount: round_to_cents(total),
            monthly_totals,
        }
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
