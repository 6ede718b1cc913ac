use crate::models::expense_claim::ExpensePayload;
use crate::{CoreError, ExpenseClaim, KindFilter, LooseNumber, Record};

fn payload(amount: LooseNumber) -> ExpensePayload {
    ExpensePayload {
        description: Some("Fuel for the van".into()),
        amount: Some(amount),
        date: Some("2025-03-01".into()),
        time: Some("12:15".into()),
        category: None,
        latitude: None,
        longitude: None,
        receipt: None,
    }
}

#[test]
fn given_boundary_amounts_when_created_then_accepted() {
    for amount in [0.0, 10_000.0, 42.5] {
        let claim = ExpenseClaim::new(2, "maria_garcia", payload(amount.into())).unwrap();
        assert_eq!(claim.amount, amount);
    }
}

#[test]
fn given_out_of_range_amounts_when_created_then_invalid_amount() {
    for amount in [-0.01, 10_000.01] {
        let result = ExpenseClaim::new(2, "maria_garcia", payload(amount.into()));
        assert!(matches!(result, Err(CoreError::InvalidAmount { .. })));
    }
}

#[test]
fn given_non_numeric_amount_when_created_then_invalid_amount() {
    let result = ExpenseClaim::new(2, "maria_garcia", payload(LooseNumber::Text("lots".into())));
    assert!(matches!(result, Err(CoreError::InvalidAmount { .. })));
}

#[test]
fn given_numeric_string_amount_when_created_then_parsed() {
    let claim = ExpenseClaim::new(2, "maria_garcia", payload(LooseNumber::Text("12.50".into())))
        .unwrap();
    assert_eq!(claim.amount, 12.50);
}

#[test]
fn given_description_out_of_bounds_when_created_then_length_error() {
    let mut short = payload(5.0.into());
    short.description = Some("ab".into());
    assert!(matches!(
        ExpenseClaim::new(2, "maria_garcia", short),
        Err(CoreError::DescriptionLength { .. })
    ));

    let mut long = payload(5.0.into());
    long.description = Some("x".repeat(201));
    assert!(matches!(
        ExpenseClaim::new(2, "maria_garcia", long),
        Err(CoreError::DescriptionLength { .. })
    ));
}

#[test]
fn given_padded_description_when_created_then_trimmed_before_length_check() {
    let mut p = payload(5.0.into());
    p.description = Some("  taxi  ".into());

    let claim = ExpenseClaim::new(2, "maria_garcia", p).unwrap();

    assert_eq!(claim.description, "taxi");
}

#[test]
fn given_no_category_when_created_then_default_applies() {
    let claim = ExpenseClaim::new(2, "maria_garcia", payload(5.0.into())).unwrap();

    assert_eq!(claim.category, ExpenseClaim::DEFAULT_CATEGORY);
    assert_eq!(claim.currency, ExpenseClaim::CURRENCY);
    assert!(claim.id.starts_with("exp-"));
}

#[test]
fn given_category_filter_when_matched_then_exact_category_required() {
    let mut p = payload(5.0.into());
    p.category = Some("Travel".into());
    let claim = ExpenseClaim::new(2, "maria_garcia", p).unwrap();

    let travel = KindFilter {
        category: Some("Travel".into()),
        ..KindFilter::default()
    };
    let meals = KindFilter {
        category: Some("Meals".into()),
        ..KindFilter::default()
    };

    assert!(claim.matches_kind_filter(&travel));
    assert!(!claim.matches_kind_filter(&meals));
}

#[test]
fn given_missing_amount_when_created_then_missing_fields_error() {
    let mut p = payload(5.0.into());
    p.amount = None;

    let result = ExpenseClaim::new(2, "maria_garcia", p);

    assert!(matches!(result, Err(CoreError::MissingFields { .. })));
}
