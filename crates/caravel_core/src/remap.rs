//! Fixed mapping between descriptor field names and short wire keys.

use serde_json::{Map, Value};

/// The eight descriptor fields with a short wire spelling.
///
/// Remapping is best-effort by design: keys outside this table pass through
/// unchanged in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireKey {
    /// `method` / `mt`
    Method,
    /// `table` / `tb`
    Table,
    /// `select` / `st`
    Select,
    /// `where` / `wr`
    Where,
    /// `order` / `or`
    Order,
    /// `noref` / `no`
    Noref,
    /// `limit` / `lt`
    Limit,
    /// `refs` / `rf`
    Refs,
}

impl WireKey {
    /// Every defined key, in descriptor field order.
    pub const ALL: [WireKey; 8] = [
        WireKey::Method,
        WireKey::Table,
        WireKey::Select,
        WireKey::Where,
        WireKey::Order,
        WireKey::Noref,
        WireKey::Limit,
        WireKey::Refs,
    ];

    /// Descriptor-side field name.
    pub const fn field(self) -> &'static str {
        match self {
            WireKey::Method => "method",
            WireKey::Table => "table",
            WireKey::Select => "select",
            WireKey::Where => "where",
            WireKey::Order => "order",
            WireKey::Noref => "noref",
            WireKey::Limit => "limit",
            WireKey::Refs => "refs",
        }
    }

    /// Wire-side short key.
    pub const fn wire(self) -> &'static str {
        match self {
            WireKey::Method => "mt",
            WireKey::Table => "tb",
            WireKey::Select => "st",
            WireKey::Where => "wr",
            WireKey::Order => "or",
            WireKey::Noref => "no",
            WireKey::Limit => "lt",
            WireKey::Refs => "rf",
        }
    }

    /// Look up a descriptor field name.
    pub fn from_field(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|entry| entry.field() == key)
    }

    /// Look up a wire key.
    pub fn from_wire(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|entry| entry.wire() == key)
    }
}

/// Remap an object's keys from descriptor field names to wire keys.
///
/// Unknown keys pass through unchanged; insertion order is preserved.
pub fn to_wire(object: &Map<String, Value>) -> Map<String, Value> {
    remap(object, |key| WireKey::from_field(key).map(WireKey::wire))
}

/// Remap an object's keys from wire keys back to descriptor field names.
///
/// Unknown keys pass through unchanged; insertion order is preserved.
pub fn to_fields(object: &Map<String, Value>) -> Map<String, Value> {
    remap(object, |key| WireKey::from_wire(key).map(WireKey::field))
}

fn remap(
    object: &Map<String, Value>,
    lookup: impl Fn(&str) -> Option<&'static str>,
) -> Map<String, Value> {
    let mut remapped = Map::with_capacity(object.len());
    for (key, value) in object {
        match lookup(key) {
            Some(renamed) => remapped.insert(renamed.to_string(), value.clone()),
            None => remapped.insert(key.clone(), value.clone()),
        };
    }
    remapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[test]
    fn test_remap_all_defined_keys() {
        let object = as_object(json!({
            "method": "login",
            "table": "users",
            "select": ["id"],
            "where": {"id": 1},
            "order": [{"column": "id"}],
            "noref": true,
            "limit": 10,
            "refs": ["roles"],
        }));
        let wire = to_wire(&object);
        assert_eq!(
            Value::Object(wire.clone()),
            json!({
                "mt": "login",
                "tb": "users",
                "st": ["id"],
                "wr": {"id": 1},
                "or": [{"column": "id"}],
                "no": true,
                "lt": 10,
                "rf": ["roles"],
            })
        );
        // Bijective for the defined set: mapping back restores the original.
        assert_eq!(Value::Object(to_fields(&wire)), Value::Object(object));
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let object = as_object(json!({"table": "users", "custom": 1}));
        let wire = to_wire(&object);
        assert_eq!(Value::Object(wire.clone()), json!({"tb": "users", "custom": 1}));
        assert_eq!(Value::Object(to_fields(&wire)), Value::Object(object));
    }

    #[test]
    fn test_lookup_is_consistent_both_ways() {
        for key in WireKey::ALL {
            assert_eq!(WireKey::from_field(key.field()), Some(key));
            assert_eq!(WireKey::from_wire(key.wire()), Some(key));
        }
        assert_eq!(WireKey::from_field("nope"), None);
        assert_eq!(WireKey::from_wire("xx"), None);
    }
}
