//! Nested bracket-notation query-string codec.
//!
//! Objects and arrays flatten to `body[0][wr][id]=5` style pairs: key
//! segments and values are form-urlencoded individually while the brackets
//! stay literal, which matches the default nested encoding of common
//! query-string libraries. The decoder performs the inverse walk; scalar
//! values come back as strings, per standard query-string semantics.

use serde_json::{Map, Value};
use url::form_urlencoded;

/// Flatten a JSON value into a bracket-notation query string.
///
/// `null` values encode as empty strings; empty objects and arrays produce
/// no pairs at all.
pub fn encode(value: &Value) -> String {
    let mut pairs = Vec::new();
    match value {
        Value::Object(map) => {
            for (key, entry) in map {
                flatten(escape(key), entry, &mut pairs);
            }
        }
        other => flatten(String::new(), other, &mut pairs),
    }
    pairs.join("&")
}

/// Parse a bracket-notation query string back into a JSON value.
///
/// All scalar leaves decode as strings. Malformed input is handled
/// best-effort: a key without brackets is a plain top-level entry.
pub fn decode(input: &str) -> Value {
    let mut root = Value::Null;
    for (key, value) in form_urlencoded::parse(input.as_bytes()) {
        let segments = split_segments(&key);
        insert(&mut root, &segments, Value::String(value.into_owned()));
    }
    match root {
        Value::Null => Value::Object(Map::new()),
        populated => populated,
    }
}

fn flatten(prefix: String, value: &Value, pairs: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, entry) in map {
                flatten(format!("{prefix}[{}]", escape(key)), entry, pairs);
            }
        }
        Value::Array(items) => {
            for (index, entry) in items.iter().enumerate() {
                flatten(format!("{prefix}[{index}]"), entry, pairs);
            }
        }
        Value::Null => pairs.push(format!("{prefix}=")),
        Value::String(text) => pairs.push(format!("{prefix}={}", escape(text))),
        Value::Bool(flag) => pairs.push(format!("{prefix}={flag}")),
        Value::Number(number) => pairs.push(format!("{prefix}={number}")),
    }
}

fn escape(text: &str) -> String {
    form_urlencoded::byte_serialize(text.as_bytes()).collect()
}

fn split_segments(key: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let head_end = key.find('[').unwrap_or(key.len());
    segments.push(key[..head_end].to_string());
    let mut rest = &key[head_end..];
    while let Some(open) = rest.find('[') {
        match rest[open..].find(']') {
            Some(close) => {
                segments.push(rest[open + 1..open + close].to_string());
                rest = &rest[open + close + 1..];
            }
            None => {
                // Unterminated bracket: keep the remainder as one segment.
                segments.push(rest[open + 1..].to_string());
                break;
            }
        }
    }
    segments
}

fn insert(slot: &mut Value, segments: &[String], leaf: Value) {
    let Some((head, rest)) = segments.split_first() else {
        *slot = leaf;
        return;
    };
    match head.parse::<usize>() {
        Ok(index) => {
            if !matches!(slot, Value::Array(_)) {
                *slot = Value::Array(Vec::new());
            }
            if let Value::Array(items) = slot {
                while items.len() <= index {
                    items.push(Value::Null);
                }
                insert(&mut items[index], rest, leaf);
            }
        }
        Err(_) => {
            if !matches!(slot, Value::Object(_)) {
                *slot = Value::Object(Map::new());
            }
            if let Value::Object(map) = slot {
                let entry = map.entry(head.clone()).or_insert(Value::Null);
                insert(entry, rest, leaf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_nested_batch() {
        let envelope = json!({"body": [{"tb": "users", "wr": {"id": 5}}]});
        assert_eq!(encode(&envelope), "body[0][tb]=users&body[0][wr][id]=5");
    }

    #[test]
    fn test_encode_escapes_values_but_not_brackets() {
        let envelope = json!({"body": [{"tb": "user events", "wr": {"name": "a&b=c"}}]});
        assert_eq!(
            encode(&envelope),
            "body[0][tb]=user+events&body[0][wr][name]=a%26b%3Dc"
        );
    }

    #[test]
    fn test_encode_scalars() {
        let envelope = json!({"body": [{"no": true, "lt": 10, "tb": "t"}]});
        assert_eq!(encode(&envelope), "body[0][no]=true&body[0][lt]=10&body[0][tb]=t");
    }

    #[test]
    fn test_decode_reconstructs_structure() {
        let decoded = decode("body[0][tb]=users&body[0][wr][id]=5");
        assert_eq!(decoded, json!({"body": [{"tb": "users", "wr": {"id": "5"}}]}));
    }

    #[test]
    fn test_round_trip_with_string_scalars() {
        let envelope = json!({"body": [
            {"tb": "users", "wr": {"id": "5"}, "st": ["id", "name"]},
            {"tb": "roles", "no": "true"},
        ]});
        assert_eq!(decode(&encode(&envelope)), envelope);
    }

    #[test]
    fn test_decode_unescapes_pairs() {
        let decoded = decode("body[0][wr][name]=a%26b%3Dc&plain=1");
        assert_eq!(
            decoded,
            json!({"body": [{"wr": {"name": "a&b=c"}}], "plain": "1"})
        );
    }

    #[test]
    fn test_decode_empty_input_is_an_empty_object() {
        assert_eq!(decode(""), json!({}));
    }
}
