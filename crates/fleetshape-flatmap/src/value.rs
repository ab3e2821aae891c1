//! Dynamic value tree exchanged with the configuration engine

use crate::error::{Result, ShapeError};
use crate::set::StringSet;
use std::collections::BTreeMap;
use std::ops::Index;

/// A dynamically-typed configuration value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(String),
    Int(i64),
    Bool(bool),
    List(Vec<Value>),
    Map(Record),
    Set(StringSet),
}

impl Value {
    /// Name of the variant, used in type mismatch messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Int(_) => "int",
            Value::Bool(_) => "bool",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Set(_) => "set",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Integer view: an `Int`, or a string holding a decimal integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Boolean view: a `Bool`, or the strings `"true"` / `"false"`
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::String(s) => match s.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Record> {
        match self {
            Value::Map(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<&StringSet> {
        match self {
            Value::Set(set) => Some(set),
            _ => None,
        }
    }

    /// Render a scalar for error messages
    fn describe(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Int(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => format!("<{}>", other.kind()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items.into_iter().map(Value::String).collect())
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Map(record)
    }
}

impl From<StringSet> for Value {
    fn from(set: StringSet) -> Self {
        Value::Set(set)
    }
}

/// A record: attribute name to value, keys kept in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Required string attribute
    pub fn require_str(&self, field: &str) -> Result<&str> {
        match self.get(field) {
            None => Err(ShapeError::missing_field(field)),
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(ShapeError::malformed_field(
                field,
                other.describe(),
                format!("expected a string, found {}", other.kind()),
            )),
        }
    }

    /// Required integer attribute; decimal strings are accepted
    pub fn require_int(&self, field: &str) -> Result<i64> {
        let value = self
            .get(field)
            .ok_or_else(|| ShapeError::missing_field(field))?;
        value.as_int().ok_or_else(|| {
            ShapeError::malformed_field(field, value.describe(), "expected an integer")
        })
    }

    pub fn opt_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    pub fn opt_int(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(Value::as_int)
    }

    pub fn opt_bool(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(Value::as_bool)
    }
}

impl Index<&str> for Record {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        &self.fields[key]
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listener() -> Record {
        Record::new()
            .with("instance_port", 8000)
            .with("lb_port", "80")
            .with("lb_protocol", "http")
            .with("enabled", true)
    }

    #[test]
    fn test_require_int_accepts_int_and_decimal_string() {
        let record = listener();
        assert_eq!(record.require_int("instance_port").unwrap(), 8000);
        assert_eq!(record.require_int("lb_port").unwrap(), 80);
    }

    #[test]
    fn test_require_int_rejects_text() {
        let err = listener().require_int("lb_protocol").unwrap_err();
        assert!(err.is_malformed_field());
    }

    #[test]
    fn test_require_missing_field() {
        let record = listener();
        let err = record.require_int("timeout").unwrap_err();
        assert!(err.is_missing_field());
        assert!(record.require_str("target").unwrap_err().is_missing_field());
    }

    #[test]
    fn test_require_str_rejects_non_string() {
        let err = listener().require_str("instance_port").unwrap_err();
        assert!(err.is_malformed_field());
    }

    #[test]
    fn test_opt_bool_accepts_flat_strings() {
        let record = Record::new()
            .with("a", "true")
            .with("b", "false")
            .with("c", "yes");
        assert_eq!(record.opt_bool("a"), Some(true));
        assert_eq!(record.opt_bool("b"), Some(false));
        assert_eq!(record.opt_bool("c"), None);
        assert_eq!(listener().opt_bool("enabled"), Some(true));
    }

    #[test]
    fn test_index_and_keys() {
        let record = listener();
        assert_eq!(record["lb_protocol"], Value::from("http"));
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(
            keys,
            vec!["enabled", "instance_port", "lb_port", "lb_protocol"]
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::from("x").kind(), "string");
        assert_eq!(Value::from(1).kind(), "int");
        assert_eq!(Value::List(vec![]).kind(), "list");
        assert_eq!(Value::Set(StringSet::new()).kind(), "set");
        assert_eq!(Value::Map(Record::new()).kind(), "map");
    }
}
