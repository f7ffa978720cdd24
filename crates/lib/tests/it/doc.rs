//! Record, value and field path tests
//!
//! Exercises path resolution through nested records and lists, strict path
//! parsing at the boundary, and the JSON shape of records.

use clubdb::doc::{Doc, FieldPath, Value};

use crate::helpers::activity;

#[test]
fn test_nested_paths_resolve_through_records_and_lists() {
    let chess = activity("Chess Club", &["Monday", "Friday"], "15:15", "16:45", &[]);

    assert_eq!(chess.get_as::<&str>("schedule_details.start_time"), Some("15:15"));
    assert_eq!(chess.get_as::<&str>("schedule_details.days.0"), Some("Monday"));
    assert_eq!(chess.get_as::<&str>("schedule_details.days.1"), Some("Friday"));
    assert!(chess.get("schedule_details.days.2").is_none());
    assert!(chess.get("schedule_details.room").is_none());
    assert!(chess.get("max_participants.value").is_none());
}

#[test]
fn test_set_path_builds_intermediate_records() {
    let mut doc = Doc::new();
    doc.set_path(&FieldPath::from("schedule_details.start_time"), "15:15")
        .unwrap();
    doc.set_path(&FieldPath::from("schedule_details.end_time"), "16:45")
        .unwrap();

    assert_eq!(doc.len(), 1);
    let schedule = doc.get_as::<&Doc>("schedule_details").unwrap();
    assert_eq!(schedule.keys().collect::<Vec<_>>(), vec!["start_time", "end_time"]);
}

#[test]
fn test_set_path_rejects_empty_path() {
    let mut doc = Doc::new();
    let err = doc.set_path(&FieldPath::from(""), 1).unwrap_err();
    assert!(err.is_path_error());
    assert!(doc.is_empty());
}

#[test]
fn test_strict_parse_rejects_malformed_paths() {
    for bad in ["", ".", "a..b", ".a", "a."] {
        assert!(bad.parse::<FieldPath>().is_err(), "accepted {bad:?}");
    }
    let path: FieldPath = "schedule_details.days".parse().unwrap();
    assert_eq!(path.len(), 2);
    assert_eq!(path.last(), Some("days"));
}

#[test]
fn test_record_json_shape() {
    let json = serde_json::json!({
        "description": "Learn strategies and compete in chess tournaments",
        "max_participants": 12,
        "participants": ["michael@mergington.edu"],
        "schedule_details": {"days": ["Monday", "Friday"], "start_time": "15:15"},
        "featured": true,
        "room": null
    });
    let doc: Doc = serde_json::from_value(json.clone()).unwrap();

    assert_eq!(doc.get("featured"), Some(&Value::Bool(true)));
    assert_eq!(doc.get("room"), Some(&Value::Null));
    assert_eq!(doc.get_as::<i64>("max_participants"), Some(12));
    assert_eq!(serde_json::to_value(&doc).unwrap(), json);
}

#[test]
fn test_fractional_numbers_round_trip() {
    let json = serde_json::json!({"rating": 4.5, "hours": [1.25, 2], "max_participants": 12});
    let doc: Doc = serde_json::from_value(json.clone()).unwrap();

    assert_eq!(doc.get_as::<f64>("rating"), Some(4.5));
    assert_eq!(doc.get("hours.0"), Some(&Value::Float(1.25)));
    assert_eq!(doc.get("max_participants"), Some(&Value::Int(12)));
    assert_eq!(serde_json::to_value(&doc).unwrap(), json);
}
