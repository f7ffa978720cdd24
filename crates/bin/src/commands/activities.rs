//! Activity listing with schedule filters.

use clubdb::{
    Instance, Query,
    constants::{SCHEDULE_DAYS, SCHEDULE_END_TIME, SCHEDULE_START_TIME},
};

use super::print_json;
use crate::cli::ActivitiesArgs;

/// Build the filter for the given arguments. No flags means every activity.
pub fn build_query(args: &ActivitiesArgs) -> Query {
    let mut query = Query::new();
    if let Some(day) = &args.day {
        query = query.is_in(SCHEDULE_DAYS, [day.as_str()]);
    }
    if let Some(start) = &args.start_after {
        query = query.gte(SCHEDULE_START_TIME, start.as_str());
    }
    if let Some(end) = &args.end_before {
        query = query.lte(SCHEDULE_END_TIME, end.as_str());
    }
    query
}

/// Run the activities command
pub fn run(instance: &Instance, args: &ActivitiesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let query = build_query(args);
    let activities = instance.activities().find(&query);
    tracing::debug!(count = activities.len(), "Listed activities");
    print_json(&activities)
}
