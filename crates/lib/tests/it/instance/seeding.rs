//! Seeding from the built-in catalog and from fixture files.

use std::io::Write;

use clubdb::{
    Fixtures, Instance, SeedReport,
    query::{Query, Update},
};

use crate::helpers::{ids, participants, test_instance};

#[test]
fn test_default_catalog_seeds_both_collections() {
    let instance = test_instance();

    assert_eq!(instance.activities().len(), 12);
    assert_eq!(instance.teachers().len(), 3);
    assert_eq!(instance.activities().name(), "activities");
    assert_eq!(instance.teachers().name(), "teachers");

    let all = instance.activities().find_all();
    assert_eq!(ids(&all)[0], "Chess Club");
    assert_eq!(ids(&all)[11], "Sunday Chess Tournament");
}

#[test]
fn test_seeding_is_idempotent() {
    let fixtures = Fixtures::default_catalog().unwrap();
    let instance = Instance::new();

    let first = instance.init(&fixtures).unwrap();
    assert_eq!(
        first,
        SeedReport {
            activities: 12,
            teachers: 3
        }
    );

    let chess = Query::by_id("Chess Club");
    instance.activities().update_one(
        &chess,
        &Update::new().push("participants", "ava@mergington.edu"),
    );

    let second = instance.init(&fixtures).unwrap();
    assert_eq!(second, SeedReport::default());
    assert_eq!(instance.activities().len(), 12);
    assert_eq!(
        participants(&instance.activities().find_one(&chess).unwrap()).len(),
        3
    );
}

#[test]
fn test_clones_share_collections() {
    let instance = test_instance();
    let other = instance.clone();

    other.activities().update_one(
        &Query::by_id("Art Club"),
        &Update::new().push("participants", "ava@mergington.edu"),
    );
    let art = instance.activities().find_one(&Query::by_id("Art Club")).unwrap();
    assert!(participants(&art).contains(&"ava@mergington.edu".to_string()));
}

#[test]
fn test_fixtures_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "activities": {{
                "Chess Club": {{
                    "max_participants": 12,
                    "participants": [],
                    "schedule_details": {{"days": ["Monday"], "start_time": "15:15", "end_time": "16:45"}}
                }}
            }},
            "teachers": [
                {{"username": "mchen", "display_name": "Mr. Chen", "password": "chess456"}}
            ]
        }}"#
    )
    .unwrap();

    let fixtures = Fixtures::from_path(file.path()).unwrap();
    let instance = Instance::open(&fixtures).unwrap();
    assert_eq!(instance.activities().len(), 1);
    assert_eq!(instance.activities().aggregate_distinct_days(), vec!["Monday"]);
    assert!(instance.authenticate("mchen", "chess456").unwrap().is_some());
}

#[test]
fn test_missing_fixture_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Fixtures::from_path(dir.path().join("missing.json")).unwrap_err();
    assert!(err.is_io_error());
}
