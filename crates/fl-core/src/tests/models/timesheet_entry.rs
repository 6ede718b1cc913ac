use crate::{CoreError, TimesheetEntry};

#[test]
fn given_all_fields_when_created_then_owner_and_timestamp_are_stamped() {
    let entry = TimesheetEntry::new(
        7,
        "juan_perez",
        Some("2025-01-15".into()),
        Some("09:00".into()),
        Some("Site visit".into()),
    )
    .unwrap();

    assert_eq!(entry.date, "2025-01-15");
    assert_eq!(entry.time, "09:00");
    assert_eq!(entry.description, "Site visit");
    assert_eq!(entry.user_id, 7);
    assert_eq!(entry.username, "juan_perez");
    assert!(!entry.id.is_empty());
}

#[test]
fn given_missing_description_when_created_then_missing_fields_error() {
    let result = TimesheetEntry::new(
        7,
        "juan_perez",
        Some("2025-01-15".into()),
        Some("09:00".into()),
        None,
    );

    assert!(matches!(result, Err(CoreError::MissingFields { .. })));
}

#[test]
fn given_blank_date_when_created_then_missing_fields_error() {
    let result = TimesheetEntry::new(
        7,
        "juan_perez",
        Some("   ".into()),
        Some("09:00".into()),
        Some("Site visit".into()),
    );

    assert!(matches!(result, Err(CoreError::MissingFields { .. })));
}
