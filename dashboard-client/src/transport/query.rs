//! Query-string flattening
//!
//! Keys are emitted in lexicographic order and `null` is skipped.
//! Arrays repeat their key (`k=a&k=b`), nested objects use bracket
//! notation (`k[sub]=v`). Percent-encoding happens in the transport.

use serde::Serialize;
use serde::ser::Error as _;
use serde_json::{Map, Value};

use crate::ClientResult;

/// Flatten a serializable value into ordered query pairs
pub fn encode_query<T: Serialize + ?Sized>(value: &T) -> ClientResult<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    match serde_json::to_value(value)? {
        Value::Object(map) => {
            for (key, value) in sorted(map) {
                push_value(&mut pairs, key, value);
            }
        }
        Value::Null => {}
        other => {
            return Err(serde_json::Error::custom(format!(
                "query parameters must serialize to an object, got {other}"
            ))
            .into());
        }
    }
    Ok(pairs)
}

fn sorted(map: Map<String, Value>) -> Vec<(String, Value)> {
    let mut entries: Vec<(String, Value)> = map.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
}

fn push_value(pairs: &mut Vec<(String, String)>, key: String, value: Value) {
    match value {
        Value::Null => {}
        Value::String(s) => pairs.push((key, s)),
        Value::Number(n) => pairs.push((key, n.to_string())),
        Value::Bool(b) => pairs.push((key, b.to_string())),
        Value::Array(items) => {
            for (index, item) in items.into_iter().enumerate() {
                match item {
                    Value::Array(_) | Value::Object(_) => {
                        push_value(pairs, format!("{key}[{index}]"), item);
                    }
                    scalar => push_value(pairs, key.clone(), scalar),
                }
            }
        }
        Value::Object(map) => {
            for (sub, value) in sorted(map) {
                push_value(pairs, format!("{key}[{sub}]"), value);
            }
        }
    }
}
