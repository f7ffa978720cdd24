//! Distinct schedule days.

use clubdb::Instance;

use super::print_json;

/// Run the days command
pub fn run(instance: &Instance) -> Result<(), Box<dyn std::error::Error>> {
    print_json(&instance.activities().aggregate_distinct_days())
}
