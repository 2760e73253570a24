//! Typed predicate trees for the `where` field.
//!
//! A [`Condition`] lowers into the nested key/operator/value mapping the wire
//! format expects, e.g. `{"id":{"IN":[1,2]}}` or `{"AND":[...]}`. The
//! descriptor itself stores the lowered `serde_json::Value`, so hand-written
//! mappings and typed trees interoperate freely.

use serde_json::{Map, Value, json};

/// Predicate tree for a table query.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Column equals value
    Eq(String, Value),
    /// Column is one of the listed values
    In(String, Vec<Value>),
    /// Column is none of the listed values
    NotIn(String, Vec<Value>),
    /// Column lies in the inclusive range
    Between(String, Value, Value),
    /// Column lies outside the inclusive range
    NotBetween(String, Value, Value),
    /// Column matches the pattern
    Like(String, String),
    /// Column does not match the pattern
    NotLike(String, String),
    /// All sub-conditions hold
    And(Vec<Condition>),
    /// At least one sub-condition holds
    Or(Vec<Condition>),
    /// The sub-condition does not hold
    Not(Box<Condition>),
}

impl Condition {
    /// Column equals value.
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Condition::Eq(column.into(), value.into())
    }

    /// Column is one of the listed values.
    pub fn is_in(column: impl Into<String>, values: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Condition::In(column.into(), values.into_iter().map(Into::into).collect())
    }

    /// Column is none of the listed values.
    pub fn not_in(
        column: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<Value>>,
    ) -> Self {
        Condition::NotIn(column.into(), values.into_iter().map(Into::into).collect())
    }

    /// Column lies in the inclusive range `[low, high]`.
    pub fn between(column: impl Into<String>, low: impl Into<Value>, high: impl Into<Value>) -> Self {
        Condition::Between(column.into(), low.into(), high.into())
    }

    /// Column lies outside the inclusive range `[low, high]`.
    pub fn not_between(
        column: impl Into<String>,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Self {
        Condition::NotBetween(column.into(), low.into(), high.into())
    }

    /// Column matches the pattern.
    pub fn like(column: impl Into<String>, pattern: impl Into<String>) -> Self {
        Condition::Like(column.into(), pattern.into())
    }

    /// Column does not match the pattern.
    pub fn not_like(column: impl Into<String>, pattern: impl Into<String>) -> Self {
        Condition::NotLike(column.into(), pattern.into())
    }

    /// All sub-conditions hold.
    pub fn and(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Condition::And(conditions.into_iter().collect())
    }

    /// At least one sub-condition holds.
    pub fn or(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Condition::Or(conditions.into_iter().collect())
    }

    /// The sub-condition does not hold.
    pub fn not(condition: Condition) -> Self {
        Condition::Not(Box::new(condition))
    }
}

impl From<Condition> for Value {
    fn from(condition: Condition) -> Self {
        match condition {
            Condition::Eq(column, value) => single(column, value),
            Condition::In(column, values) => single(column, json!({ "IN": values })),
            Condition::NotIn(column, values) => single(column, json!({ "NOT IN": values })),
            Condition::Between(column, low, high) => {
                single(column, json!({ "BETWEEN": [low, high] }))
            }
            Condition::NotBetween(column, low, high) => {
                single(column, json!({ "NOT BETWEEN": [low, high] }))
            }
            Condition::Like(column, pattern) => single(column, json!({ "LIKE": pattern })),
            Condition::NotLike(column, pattern) => single(column, json!({ "NOT LIKE": pattern })),
            Condition::And(conditions) => group("AND", conditions),
            Condition::Or(conditions) => group("OR", conditions),
            Condition::Not(condition) => single("NOT".to_string(), Value::from(*condition)),
        }
    }
}

fn single(key: String, value: impl Into<Value>) -> Value {
    let mut map = Map::new();
    map.insert(key, value.into());
    Value::Object(map)
}

fn group(operator: &str, conditions: Vec<Condition>) -> Value {
    let values: Vec<Value> = conditions.into_iter().map(Value::from).collect();
    single(operator.to_string(), Value::Array(values))
}
