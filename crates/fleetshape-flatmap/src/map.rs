//! Flat dotted-key attribute map
//!
//! The engine stores every resource as a flat map of dotted keys to strings:
//!
//! ```text
//! listener.#                = "1"
//! listener.0.lb_port        = "80"
//! listener.0.lb_protocol    = "http"
//! availability_zones.#      = "2"
//! availability_zones.0      = "us-east-1a"
//! availability_zones.1      = "us-east-1b"
//! ```
//!
//! `K.#` carries the length of the sequence rooted at `K`, numeric segments
//! index into it and any other segment names a record field.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Bound;

/// Suffix segment holding a sequence length
pub const COUNT_SEGMENT: &str = "#";

/// Flat map of dotted keys to string values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatMap {
    entries: BTreeMap<String, String>,
}

impl FlatMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of string values, as stored in the engine state
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge another map into this one, overwriting duplicate keys
    pub fn extend(&mut self, other: FlatMap) {
        self.entries.extend(other.entries);
    }

    /// Entries whose key starts with `prefix`, in key order
    pub(crate) fn with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.entries
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FlatMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_str() {
        let map = FlatMap::from_json_str(
            r#"{"availability_zones.#": "1", "availability_zones.0": "us-east-1a"}"#,
        )
        .unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("availability_zones.0"), Some("us-east-1a"));
    }

    #[test]
    fn test_from_json_str_rejects_non_string_values() {
        let err = FlatMap::from_json_str(r#"{"listener.#": 1}"#).unwrap_err();
        assert!(matches!(err, crate::ShapeError::Json(_)));
    }

    #[test]
    fn test_with_prefix() {
        let map: FlatMap = [
            ("ingress.#", "1"),
            ("ingress.0.protocol", "icmp"),
            ("ingress_rules", "x"),
            ("listener.#", "0"),
        ]
        .into_iter()
        .collect();

        let keys: Vec<&str> = map.with_prefix("ingress.").map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["ingress.#", "ingress.0.protocol"]);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let map: FlatMap = [("a", "1")].into_iter().collect();
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"a":"1"}"#);
    }
}
