//! Raw JSON queries against either collection.

use clubdb::{Instance, Query};

use super::print_json;
use crate::cli::{CollectionName, QueryArgs};

/// Run the query command
///
/// Account password hashes are stripped before printing.
pub fn run(instance: &Instance, args: &QueryArgs) -> Result<(), Box<dyn std::error::Error>> {
    let filter: serde_json::Value = serde_json::from_str(&args.filter)?;
    let query = Query::from_json(&filter)?;

    let records = match args.collection {
        CollectionName::Activities => instance.activities().find(&query),
        CollectionName::Teachers => instance
            .teachers()
            .find(&query)
            .into_iter()
            .map(|mut account| {
                account.remove("password");
                account
            })
            .collect(),
    };
    print_json(&records)
}
