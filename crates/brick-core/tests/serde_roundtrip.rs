use brick_core::errors::{BrickError, ErrorInfo};
use brick_core::{Dimensions, Point};

#[test]
fn error_round_trip_json() {
    let err = BrickError::BrickPosition(
        ErrorInfo::new("brick-position", "part is not adjacent")
            .with_context("id", 3)
            .with_context("row", 1)
            .with_context("col", 2),
    );

    let json = serde_json::to_string_pretty(&err).expect("serialize");
    assert!(json.contains("\"kind\": \"BrickPosition\""));
    let decoded: BrickError = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(decoded, err);
}

#[test]
fn dimensions_and_points_round_trip_json() {
    let dims = Dimensions::new(4, 6);
    let json = serde_json::to_string(&dims).expect("serialize");
    assert_eq!(json, r#"{"rows":4,"columns":6}"#);
    assert_eq!(serde_json::from_str::<Dimensions>(&json).unwrap(), dims);

    let point = Point::new(2, 5);
    let decoded: Point = serde_json::from_str(&serde_json::to_string(&point).unwrap()).unwrap();
    assert_eq!(decoded, point);
}
