//! Builder-API queries evaluated by a collection.

use clubdb::query::Query;

use crate::helpers::{ids, test_activities};

#[test]
fn test_in_matches_any_shared_element() {
    let activities = test_activities();

    let tuesday = activities.find(&Query::new().is_in("schedule_details.days", ["Tuesday"]));
    assert_eq!(ids(&tuesday), vec!["Soccer Team", "Math Club"]);

    let either = activities.find(
        &Query::new().is_in("schedule_details.days", ["Friday", "Thursday"]),
    );
    assert_eq!(ids(&either), vec!["Chess Club", "Soccer Team"]);

    let none = activities.find(&Query::new().is_in("schedule_details.days", ["Sunday"]));
    assert!(none.is_empty());
}

#[test]
fn test_in_requires_list_field() {
    let activities = test_activities();
    let query = Query::new().is_in("schedule_details.start_time", ["15:15"]);
    assert_eq!(activities.count_documents(&query), 0);
}

#[test]
fn test_time_bounds_are_inclusive() {
    let activities = test_activities();

    let after = activities.find(&Query::new().gte("schedule_details.start_time", "15:15"));
    assert_eq!(ids(&after), vec!["Chess Club", "Soccer Team"]);

    let before = activities.find(&Query::new().lte("schedule_details.end_time", "16:45"));
    assert_eq!(ids(&before), vec!["Chess Club", "Math Club"]);

    let window = Query::new()
        .gte("schedule_details.start_time", "15:00")
        .lte("schedule_details.end_time", "17:00");
    assert_eq!(ids(&activities.find(&window)), vec!["Chess Club"]);
}

#[test]
fn test_bounds_never_match_across_types() {
    let activities = test_activities();
    // Text never orders against an integer
    assert_eq!(
        activities.count_documents(&Query::new().gte("schedule_details.start_time", 0)),
        0
    );
    assert_eq!(
        activities.count_documents(&Query::new().lte("max_participants", 12)),
        3
    );
    assert_eq!(
        activities.count_documents(&Query::new().lte("max_participants", "12")),
        0
    );
}

#[test]
fn test_missing_fields_never_match() {
    let activities = test_activities();
    for query in [
        Query::new().eq("room", "B12"),
        Query::new().is_in("tags", ["outdoor"]),
        Query::new().gte("schedule_details.room", "A"),
    ] {
        assert!(activities.find(&query).is_empty());
    }
}

#[test]
fn test_equality_on_id_and_fields() {
    let activities = test_activities();

    let by_field = activities.find(&Query::new().eq("schedule_details.start_time", "15:30"));
    assert_eq!(ids(&by_field), vec!["Soccer Team"]);

    let by_id = activities.find(&Query::new().eq("_id", "Math Club"));
    assert_eq!(ids(&by_id), vec!["Math Club"]);

    let contradiction = Query::by_id("Math Club").eq("schedule_details.start_time", "15:30");
    assert!(activities.find_one(&contradiction).is_none());
}
