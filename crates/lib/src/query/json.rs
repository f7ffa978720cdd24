//! Document-database JSON syntax for queries and updates.
//!
//! Request handlers usually carry filters in the familiar operator syntax:
//!
//! ```json
//! {"schedule_details.days": {"$in": ["Monday"]}, "schedule_details.start_time": {"$gte": "15:00"}}
//! {"$push": {"participants": "ava@mergington.edu"}}
//! ```
//!
//! The parsers here turn that syntax into [`Query`] and [`Update`] values.
//! Supported query operators are `$in`, `$gte` and `$lte`. Any other value is an
//! equality test. Supported update operators are `$push`, `$pull` and `$set`.
//! Anything else is rejected with a [`QueryError`].

use serde_json::{Map, Value as Json};

use super::{Clause, Condition, Query, QueryError, Update};
use crate::doc::{FieldPath, Value};

const IN: &str = "$in";
const GTE: &str = "$gte";
const LTE: &str = "$lte";
const PUSH: &str = "$push";
const PULL: &str = "$pull";
const SET: &str = "$set";

fn as_object<'a>(json: &'a Json, context: &str) -> Result<&'a Map<String, Json>, QueryError> {
    json.as_object().ok_or_else(|| QueryError::NotAnObject {
        context: context.to_string(),
    })
}

fn is_operator_object(json: &Json) -> bool {
    json.as_object()
        .is_some_and(|map| map.keys().any(|key| key.starts_with('$')))
}

fn condition(operator: &str, operand: &Json) -> Result<Condition, QueryError> {
    match operator {
        IN => {
            let items = operand
                .as_array()
                .ok_or_else(|| QueryError::InvalidOperand {
                    operator: operator.to_string(),
                    reason: "expected an array".to_string(),
                })?;
            let candidates = items
                .iter()
                .cloned()
                .map(Value::try_from)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Condition::In(candidates))
        }
        GTE => Ok(Condition::Min(Value::try_from(operand.clone())?)),
        LTE => Ok(Condition::Max(Value::try_from(operand.clone())?)),
        other => Err(QueryError::UnsupportedOperator {
            operator: other.to_string(),
        }),
    }
}

impl Query {
    /// Parses a JSON filter document.
    ///
    /// Several operators on one field become several clauses, so
    /// `{"n": {"$gte": 1, "$lte": 5}}` is a range.
    ///
    /// ```
    /// # use clubdb::query::Query;
    /// let json = serde_json::json!({
    ///     "schedule_details.days": {"$in": ["Monday", "Friday"]}
    /// });
    /// let query = Query::from_json(&json)?;
    /// assert_eq!(
    ///     query,
    ///     Query::new().is_in("schedule_details.days", ["Monday", "Friday"])
    /// );
    /// # Ok::<(), clubdb::query::QueryError>(())
    /// ```
    pub fn from_json(json: &Json) -> Result<Self, QueryError> {
        let mut query = Query::new();
        for (key, value) in as_object(json, "query")? {
            let path = FieldPath::parse(key)?;
            if is_operator_object(value) {
                for (operator, operand) in as_object(value, key)? {
                    query = query.and(Clause {
                        path: path.clone(),
                        condition: condition(operator, operand)?,
                    });
                }
            } else {
                query = query.and(Clause {
                    path,
                    condition: Condition::Equals(Value::try_from(value.clone())?),
                });
            }
        }
        Ok(query)
    }
}

impl Update {
    /// Parses a JSON update document.
    ///
    /// ```
    /// # use clubdb::query::Update;
    /// let json = serde_json::json!({
    ///     "$pull": {"participants": "ava@mergington.edu"},
    ///     "$set": {"max_participants": 16}
    /// });
    /// let update = Update::from_json(&json)?;
    /// assert_eq!(
    ///     update,
    ///     Update::new()
    ///         .pull("participants", "ava@mergington.edu")
    ///         .set("max_participants", 16)
    /// );
    /// # Ok::<(), clubdb::query::QueryError>(())
    /// ```
    pub fn from_json(json: &Json) -> Result<Self, QueryError> {
        let mut update = Update::new();
        for (operator, fields) in as_object(json, "update")? {
            let directive: fn(Update, FieldPath, Value) -> Update = match operator.as_str() {
                PUSH => |update, path, value| update.push(path, value),
                PULL => |update, path, value| update.pull(path, value),
                SET => |update, path, value| update.set(path, value),
                other => {
                    return Err(QueryError::UnsupportedOperator {
                        operator: other.to_string(),
                    });
                }
            };
            for (key, value) in as_object(fields, operator)? {
                let path = FieldPath::parse(key)?;
                update = directive(update, path, Value::try_from(value.clone())?);
            }
        }
        Ok(update)
    }
}
