//! Declarative query descriptors.

use crate::remap;
use caravel_error::{DispatchError, DispatchErrorKind, DispatchResult};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One query unit in a dispatch batch.
///
/// A descriptor either names a server-side remote procedure (`method`) or
/// describes a table query (`table`/`select`/`where`/`order`/...). A batch
/// mixing a `method` entry with anything else is a configuration error,
/// rejected at classification time.
#[derive(
    Debug, Clone, PartialEq, Default, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into, strip_option), pattern = "owned", default)]
pub struct QueryDescriptor {
    /// Name of a server-side remote procedure
    #[serde(skip_serializing_if = "Option::is_none")]
    method: Option<String>,
    /// Target table/collection name
    #[serde(skip_serializing_if = "Option::is_none")]
    table: Option<String>,
    /// Selected columns, or the payload for mutating operations
    #[serde(skip_serializing_if = "Option::is_none")]
    select: Option<SelectSpec>,
    /// Predicate tree (see [`crate::Condition`] for a typed builder)
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    where_: Option<Value>,
    /// Ordering specification; default ascending
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<Vec<OrderBy>>,
    /// Suppress referenced/joined tables in the result
    #[serde(skip_serializing_if = "Option::is_none")]
    noref: Option<bool>,
    /// Row-count cap
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u64>,
    /// Referenced tables to include
    #[serde(skip_serializing_if = "Option::is_none")]
    refs: Option<Vec<String>>,
}

impl QueryDescriptor {
    /// Creates a builder for `QueryDescriptor`.
    pub fn builder() -> QueryDescriptorBuilder {
        QueryDescriptorBuilder::default()
    }

    /// Serialize this descriptor and remap its keys to wire spelling.
    ///
    /// # Errors
    ///
    /// Returns an encoding error if the descriptor cannot be serialized to a
    /// JSON object.
    pub fn to_wire(&self) -> DispatchResult<Map<String, Value>> {
        let value = serde_json::to_value(self)
            .map_err(|e| DispatchError::new(DispatchErrorKind::Encoding(e.to_string())))?;
        match value {
            Value::Object(object) => Ok(remap::to_wire(&object)),
            other => Err(DispatchError::new(DispatchErrorKind::Encoding(format!(
                "descriptor did not serialize to an object: {other}"
            )))),
        }
    }
}

/// Selection specification: a projection or a mutation payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectSpec {
    /// A single column name
    Column(String),
    /// A list of column names
    Columns(Vec<String>),
    /// Patch/insert payload for mutating operations
    Payload(Map<String, Value>),
}

impl From<&str> for SelectSpec {
    fn from(column: &str) -> Self {
        SelectSpec::Column(column.to_string())
    }
}

impl From<Vec<String>> for SelectSpec {
    fn from(columns: Vec<String>) -> Self {
        SelectSpec::Columns(columns)
    }
}

impl From<Vec<&str>> for SelectSpec {
    fn from(columns: Vec<&str>) -> Self {
        SelectSpec::Columns(columns.into_iter().map(str::to_string).collect())
    }
}

impl From<Map<String, Value>> for SelectSpec {
    fn from(payload: Map<String, Value>) -> Self {
        SelectSpec::Payload(payload)
    }
}

/// One ordering term: a column and an optional descending flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct OrderBy {
    /// Column to order by
    column: String,
    /// Descending order when true; ascending by default
    #[serde(default, skip_serializing_if = "is_false")]
    desc: bool,
}

impl OrderBy {
    /// Ascending order on a column.
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            desc: false,
        }
    }

    /// Descending order on a column.
    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            desc: true,
        }
    }
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Condition;
    use serde_json::json;

    #[test]
    fn test_descriptor_serializes_with_field_names() {
        let descriptor = QueryDescriptor::builder()
            .table("users")
            .where_(Value::from(Condition::eq("id", 5)))
            .order(vec![OrderBy::descending("created")])
            .noref(true)
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&descriptor).unwrap(),
            json!({
                "table": "users",
                "where": {"id": 5},
                "order": [{"column": "created", "desc": true}],
                "noref": true,
            })
        );
    }

    #[test]
    fn test_descriptor_to_wire_remaps_keys() {
        let descriptor = QueryDescriptor::builder()
            .table("users")
            .select(vec!["id", "name"])
            .limit(25u64)
            .build()
            .unwrap();
        let wire = descriptor.to_wire().unwrap();
        assert_eq!(
            Value::Object(wire),
            json!({"tb": "users", "st": ["id", "name"], "lt": 25})
        );
    }

    #[test]
    fn test_select_spec_accepts_payload_maps() {
        let mut payload = Map::new();
        payload.insert("name".to_string(), json!("Ada"));
        let descriptor = QueryDescriptor::builder()
            .table("users")
            .select(payload)
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&descriptor).unwrap(),
            json!({"table": "users", "select": {"name": "Ada"}})
        );
    }

    #[test]
    fn test_order_defaults_to_ascending() {
        let order = OrderBy::ascending("id");
        assert_eq!(serde_json::to_value(&order).unwrap(), json!({"column": "id"}));
    }
}
