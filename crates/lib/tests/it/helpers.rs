use clubdb::{
    Fixtures, Instance,
    doc::{Doc, Value},
    store::Collection,
};

/// Creates an instance seeded with the built-in catalog.
pub fn test_instance() -> Instance {
    Instance::open(&Fixtures::default_catalog().unwrap()).unwrap()
}

/// Builds an activity record the way the signup service stores them.
pub fn activity(name: &str, days: &[&str], start: &str, end: &str, participants: &[&str]) -> Doc {
    let schedule: Doc = [
        ("days", Value::from(days.to_vec())),
        ("start_time", Value::from(start)),
        ("end_time", Value::from(end)),
    ]
    .into_iter()
    .collect();

    let mut doc = Doc::new();
    doc.set("_id", name);
    doc.set("description", format!("{name} for testing"));
    doc.set("schedule_details", schedule);
    doc.set("max_participants", 12);
    doc.set("participants", participants.to_vec());
    doc
}

/// A small activity collection: Chess Club, Soccer Team and Math Club.
pub fn test_activities() -> Collection {
    let activities = Collection::new("activities");
    for doc in [
        activity(
            "Chess Club",
            &["Monday", "Friday"],
            "15:15",
            "16:45",
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        activity(
            "Soccer Team",
            &["Tuesday", "Thursday"],
            "15:30",
            "17:30",
            &["liam@mergington.edu"],
        ),
        activity("Math Club", &["Tuesday"], "07:15", "08:00", &[]),
    ] {
        activities.insert_one(doc).unwrap();
    }
    activities
}

/// Identifiers of `docs`, in order.
pub fn ids(docs: &[Doc]) -> Vec<String> {
    docs.iter()
        .filter_map(|doc| doc.get_as::<&str>("_id").map(str::to_string))
        .collect()
}

/// The participant list of an activity record.
pub fn participants(doc: &Doc) -> Vec<String> {
    doc.get("participants")
        .and_then(Value::as_list)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_text)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
