//! Value tree → flat map encoding

use crate::map::{COUNT_SEGMENT, FlatMap};
use crate::value::Value;

/// Encode `value` under `key` in the flat form.
///
/// Lists and sets write a `key.#` count followed by `key.0 .. key.n-1`, records
/// write one dotted entry per field. Sets are written in their iteration order.
pub fn flatten(key: &str, value: &Value) -> FlatMap {
    let mut out = FlatMap::new();
    flatten_into(&mut out, key, value);
    out
}

/// Encode several top-level attributes into one map
pub fn flatten_all<'a>(attributes: impl IntoIterator<Item = (&'a str, &'a Value)>) -> FlatMap {
    let mut out = FlatMap::new();
    for (key, value) in attributes {
        flatten_into(&mut out, key, value);
    }
    out
}

fn flatten_into(out: &mut FlatMap, key: &str, value: &Value) {
    match value {
        Value::String(s) => {
            out.insert(key, s.as_str());
        }
        Value::Int(n) => {
            out.insert(key, n.to_string());
        }
        Value::Bool(b) => {
            out.insert(key, b.to_string());
        }
        Value::List(items) => {
            out.insert(count_key(key), items.len().to_string());
            for (i, item) in items.iter().enumerate() {
                flatten_into(out, &format!("{}.{}", key, i), item);
            }
        }
        Value::Set(set) => {
            out.insert(count_key(key), set.len().to_string());
            for (i, item) in set.iter().enumerate() {
                out.insert(format!("{}.{}", key, i), item);
            }
        }
        Value::Map(record) => {
            for (field, item) in record.iter() {
                flatten_into(out, &format!("{}.{}", key, field), item);
            }
        }
    }
}

fn count_key(key: &str) -> String {
    format!("{}.{}", key, COUNT_SEGMENT)
}
