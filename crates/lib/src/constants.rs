//! Constants used throughout the clubdb library.
//!
//! This module provides central definitions for reserved field names, well-known
//! paths and the names of the collections an [`Instance`](crate::Instance) owns.

/// Reserved field carrying a record's identifier.
///
/// The identifier is the key of the collection's mapping. It is merged into every
/// record handed back to a caller and stripped from every record handed in.
pub const ID_FIELD: &str = "_id";

/// Path of the list of weekdays an activity meets on.
pub const SCHEDULE_DAYS: &str = "schedule_details.days";

/// Path of an activity's start time (`HH:MM`, 24-hour).
pub const SCHEDULE_START_TIME: &str = "schedule_details.start_time";

/// Path of an activity's end time (`HH:MM`, 24-hour).
pub const SCHEDULE_END_TIME: &str = "schedule_details.end_time";

/// Collection holding the activity catalog, keyed by activity name.
pub const ACTIVITIES: &str = "activities";

/// Collection holding teacher and administrator accounts, keyed by username.
pub const TEACHERS: &str = "teachers";
