//! JSON filter and update documents run against a collection.

use clubdb::{
    doc::Value,
    query::{Query, Update},
};
use serde_json::json;

use crate::helpers::{ids, participants, test_activities};

#[test]
fn test_schedule_filter_from_json() {
    let activities = test_activities();
    let query = Query::from_json(&json!({
        "schedule_details.days": {"$in": ["Tuesday"]},
        "schedule_details.start_time": {"$gte": "15:00"}
    }))
    .unwrap();

    assert_eq!(ids(&activities.find(&query)), vec!["Soccer Team"]);
}

#[test]
fn test_range_on_one_field() {
    let activities = test_activities();
    let query = Query::from_json(&json!({
        "schedule_details.start_time": {"$gte": "07:00", "$lte": "15:20"}
    }))
    .unwrap();

    assert_eq!(query.clauses().len(), 2);
    assert_eq!(ids(&activities.find(&query)), vec!["Chess Club", "Math Club"]);
}

#[test]
fn test_empty_filter_matches_everything() {
    let activities = test_activities();
    let query = Query::from_json(&json!({})).unwrap();
    assert!(query.is_empty());
    assert_eq!(activities.count_documents(&query), activities.len());
}

#[test]
fn test_unsupported_operators_rejected() {
    let err = Query::from_json(&json!({"max_participants": {"$gt": 10}})).unwrap_err();
    assert!(err.is_unsupported());
    assert_eq!(err.operator(), Some("$gt"));

    let err = Update::from_json(&json!({"$inc": {"max_participants": 1}})).unwrap_err();
    assert!(err.is_unsupported());
}

#[test]
fn test_malformed_filters_rejected() {
    assert!(Query::from_json(&json!(["Chess Club"])).is_err());
    assert!(Query::from_json(&json!({"schedule_details.days": {"$in": "Monday"}})).is_err());
    assert!(Query::from_json(&json!({"a..b": 1})).is_err());
    assert!(Update::from_json(&json!({"$push": "participants"})).is_err());
}

#[test]
fn test_signup_and_unregister_from_json() {
    let activities = test_activities();
    let query = Query::from_json(&json!({"_id": "Math Club"})).unwrap();

    let signup = Update::from_json(&json!({"$push": {"participants": "ava@mergington.edu"}}))
        .unwrap();
    let result = activities.update_one(&query, &signup);
    assert_eq!(result.matched_count, 1);
    assert_eq!(
        participants(&activities.find_one(&query).unwrap()),
        vec!["ava@mergington.edu"]
    );

    let unregister =
        Update::from_json(&json!({"$pull": {"participants": "ava@mergington.edu"}})).unwrap();
    activities.update_one(&query, &unregister);
    assert!(participants(&activities.find_one(&query).unwrap()).is_empty());
}

#[test]
fn test_fractional_bounds_against_stored_numbers() {
    let activities = test_activities();
    for (name, rating) in [
        ("Chess Club", Value::Float(4.8)),
        ("Soccer Team", Value::Int(4)),
        ("Math Club", Value::Float(4.5)),
    ] {
        activities.update_one(&Query::by_id(name), &Update::new().set("rating", rating));
    }

    let at_least = Query::from_json(&json!({"rating": {"$gte": 4.5}})).unwrap();
    assert_eq!(ids(&activities.find(&at_least)), vec!["Chess Club", "Math Club"]);

    let at_most = Query::from_json(&json!({"rating": {"$lte": 4.5}})).unwrap();
    assert_eq!(ids(&activities.find(&at_most)), vec!["Soccer Team", "Math Club"]);

    let exactly_four = Query::from_json(&json!({"rating": 4.0})).unwrap();
    assert_eq!(ids(&activities.find(&exactly_four)), vec!["Soccer Team"]);
}
