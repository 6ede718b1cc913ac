use crate::models::gps_point::GpsPayload;
use crate::{CoreError, GpsPoint, KindFilter, LooseNumber, Record};

fn payload(latitude: f64, longitude: f64) -> GpsPayload {
    GpsPayload {
        latitude: Some(latitude.into()),
        longitude: Some(longitude.into()),
        date: Some("2025-03-01".into()),
        time: Some("08:30".into()),
        accuracy: None,
        altitude: None,
        speed: None,
        filename: None,
    }
}

#[test]
fn given_boundary_coordinates_when_created_then_accepted() {
    for (lat, lng) in [(90.0, 180.0), (-90.0, -180.0), (0.0, 0.0)] {
        let point = GpsPoint::new(1, "juan_perez", payload(lat, lng)).unwrap();
        assert_eq!(point.latitude, lat);
        assert_eq!(point.longitude, lng);
    }
}

#[test]
fn given_out_of_range_coordinates_when_created_then_rejected() {
    for (lat, lng) in [
        (90.0001, 0.0),
        (-90.0001, 0.0),
        (0.0, 180.0001),
        (0.0, -180.0001),
    ] {
        let result = GpsPoint::new(1, "juan_perez", payload(lat, lng));
        assert!(matches!(result, Err(CoreError::InvalidCoordinates { .. })));
    }
}

#[test]
fn given_textual_coordinates_when_created_then_parsed() {
    let mut p = payload(0.0, 0.0);
    p.latitude = Some(LooseNumber::Text("41.3874".into()));
    p.longitude = Some(LooseNumber::Text("2.1686".into()));

    let point = GpsPoint::new(1, "juan_perez", p).unwrap();

    assert_eq!(point.latitude, 41.3874);
    assert_eq!(point.longitude, 2.1686);
}

#[test]
fn given_unparseable_coordinate_when_created_then_invalid_coordinates() {
    let mut p = payload(0.0, 0.0);
    p.latitude = Some(LooseNumber::Text("north".into()));

    let result = GpsPoint::new(1, "juan_perez", p);

    assert!(matches!(result, Err(CoreError::InvalidCoordinates { .. })));
}

#[test]
fn given_missing_longitude_when_created_then_missing_fields_error() {
    let mut p = payload(0.0, 0.0);
    p.longitude = None;

    let result = GpsPoint::new(1, "juan_perez", p);

    assert!(matches!(result, Err(CoreError::MissingFields { .. })));
}

#[test]
fn given_filename_filter_when_matched_then_only_same_filename_passes() {
    let mut p = payload(1.0, 2.0);
    p.filename = Some("track-01.gpx".into());
    let point = GpsPoint::new(1, "juan_perez", p).unwrap();

    let matching = KindFilter {
        filename: Some("track-01.gpx".into()),
        ..KindFilter::default()
    };
    let other = KindFilter {
        filename: Some("track-02.gpx".into()),
        ..KindFilter::default()
    };

    assert!(point.matches_kind_filter(&matching));
    assert!(!point.matches_kind_filter(&other));

    let unnamed = GpsPoint::new(1, "juan_perez", payload(1.0, 2.0)).unwrap();
    assert!(!unnamed.matches_kind_filter(&matching));
}

#[test]
fn given_gpx_prefix_then_id_carries_it() {
    let point = GpsPoint::new(1, "juan_perez", payload(1.0, 2.0)).unwrap();
    assert!(point.id.starts_with("gpx-"));
}
