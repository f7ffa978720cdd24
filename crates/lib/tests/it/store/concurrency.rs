//! Several writers sharing one instance.

use std::thread;

use clubdb::query::{Query, Update};

use crate::helpers::{participants, test_instance};

#[test]
fn test_concurrent_signups_are_not_lost() {
    let instance = test_instance();
    let query = Query::by_id("Programming Class");
    let initial = participants(&instance.activities().find_one(&query).unwrap()).len();

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let instance = instance.clone();
            let query = query.clone();
            thread::spawn(move || {
                for n in 0..10 {
                    let update = Update::new()
                        .push("participants", format!("w{worker}s{n}@mergington.edu"));
                    let result = instance.activities().update_one(&query, &update);
                    assert_eq!(result.modified_count, 1);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let record = instance.activities().find_one(&query).unwrap();
    assert_eq!(participants(&record).len(), initial + 40);
}

#[test]
fn test_readers_see_whole_records() {
    let instance = test_instance();
    let query = Query::by_id("Chess Club");
    instance.activities().update_one(
        &query,
        &Update::new()
            .set("schedule_details.start_time", "15:00")
            .set("schedule_details.end_time", "16:00"),
    );

    let writer = {
        let instance = instance.clone();
        let query = query.clone();
        thread::spawn(move || {
            for n in 0..50 {
                instance.activities().update_one(
                    &query,
                    &Update::new()
                        .set("schedule_details.start_time", format!("15:{:02}", n))
                        .set("schedule_details.end_time", format!("16:{:02}", n)),
                );
            }
        })
    };

    for _ in 0..50 {
        let record = instance.activities().find_one(&query).unwrap();
        let start = record.get_as::<&str>("schedule_details.start_time").unwrap();
        let end = record.get_as::<&str>("schedule_details.end_time").unwrap();
        assert_eq!(start[3..], end[3..]);
    }
    writer.join().unwrap();
}
