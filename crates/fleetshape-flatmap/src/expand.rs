//! Flat map → value tree decoding

use crate::error::{Result, ShapeError};
use crate::map::{COUNT_SEGMENT, FlatMap};
use crate::value::{Record, Value};
use std::collections::BTreeSet;

impl FlatMap {
    /// Rebuild the value rooted at `key`.
    ///
    /// Leaves come back as [`Value::String`]; numeric and boolean coercion is
    /// left to the caller. A key with nothing stored under it expands to an
    /// empty list.
    pub fn expand(&self, key: &str) -> Result<Value> {
        Ok(self
            .expand_key(key)?
            .unwrap_or_else(|| Value::List(Vec::new())))
    }

    fn expand_key(&self, key: &str) -> Result<Option<Value>> {
        if let Some(v) = self.get(key) {
            tracing::trace!("Expanded leaf {}", key);
            return Ok(Some(Value::String(v.to_string())));
        }

        let prefix = format!("{}.", key);
        let children = self.child_segments(&prefix);

        let count_key = format!("{}{}", prefix, COUNT_SEGMENT);
        if let Some(raw) = self.get(&count_key) {
            let count: usize = raw.trim().parse().map_err(|_| {
                ShapeError::decode_fault(
                    &count_key,
                    format!("sequence length {:?} is not a number", raw),
                )
            })?;
            return self.expand_sequence(key, count, &children).map(Some);
        }

        if children.is_empty() {
            return Ok(None);
        }

        if children.iter().all(|s| is_index(s)) {
            return self
                .expand_sequence(key, children.len(), &children)
                .map(Some);
        }

        let mut record = Record::new();
        for segment in children {
            let child_key = format!("{}{}", prefix, segment);
            if let Some(value) = self.expand_key(&child_key)? {
                record.insert(segment, value);
            }
        }
        tracing::trace!("Expanded record {} ({} fields)", key, record.len());
        Ok(Some(Value::Map(record)))
    }

    fn expand_sequence(
        &self,
        key: &str,
        count: usize,
        children: &BTreeSet<&str>,
    ) -> Result<Value> {
        let indices: BTreeSet<usize> = children.iter().filter_map(|s| parse_index(s)).collect();

        // Indexed children must be exactly 0..count
        if let Some(&beyond) = indices.iter().find(|&&i| i >= count) {
            return Err(ShapeError::decode_fault(
                format!("{}.{}", key, beyond),
                format!("index {} is beyond sequence length {}", beyond, count),
            ));
        }
        if indices.len() < count {
            let missing = (0..count).find(|i| !indices.contains(i)).unwrap_or(count);
            return Err(ShapeError::decode_fault(
                format!("{}.{}", key, missing),
                format!("missing element {} of {}", missing, count),
            ));
        }

        let mut items = Vec::with_capacity(indices.len());
        for i in 0..count {
            let element_key = format!("{}.{}", key, i);
            match self.expand_key(&element_key)? {
                Some(value) => items.push(value),
                None => {
                    return Err(ShapeError::decode_fault(
                        element_key,
                        format!("missing element {} of {}", i, count),
                    ));
                }
            }
        }
        tracing::trace!("Expanded sequence {} ({} elements)", key, count);
        Ok(Value::List(items))
    }

    /// Distinct first segments below `prefix`, excluding the count marker
    fn child_segments<'a>(&'a self, prefix: &'a str) -> BTreeSet<&'a str> {
        self.with_prefix(prefix)
            .filter_map(|(k, _)| k[prefix.len()..].split('.').next())
            .filter(|segment| *segment != COUNT_SEGMENT)
            .collect()
    }
}

fn is_index(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

fn parse_index(segment: &str) -> Option<usize> {
    if is_index(segment) {
        segment.parse().ok()
    } else {
        None
    }
}
