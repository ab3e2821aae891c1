//! Converters between configuration values and API shapes
//!
//! `expand_*` functions turn expanded configuration (a list of [`Value`]s as
//! returned by [`FlatMap::expand`](fleetshape_flatmap::FlatMap::expand)) into
//! request shapes. `flatten_*` functions turn response shapes into records the
//! engine can store and diff.
//!
//! Converters that read required fields stop at the first error. Converters whose
//! inputs are all optional never fail; input they cannot use is dropped with a
//! warning.

pub mod ec2;
pub mod elb;
pub mod rds;
pub mod route53;

use fleetshape_flatmap::{Record, Result, ShapeError, Value};

/// Collect a list of string values
pub fn expand_string_list(configured: &[Value]) -> Result<Vec<String>> {
    configured
        .iter()
        .enumerate()
        .map(|(i, v)| match v {
            Value::String(s) => Ok(s.clone()),
            other => Err(ShapeError::type_mismatch(format!("[{}]", i), "string", other.kind())),
        })
        .collect()
}

/// Element `index` of a configured list, which must be a record
pub(crate) fn require_record(value: &Value, index: usize) -> Result<&Record> {
    value
        .as_map()
        .ok_or_else(|| ShapeError::type_mismatch(format!("[{}]", index), "map", value.kind()))
}

/// Required string that must also be non-empty
pub(crate) fn require_text<'a>(record: &'a Record, field: &str) -> Result<&'a str> {
    let s = record.require_str(field)?;
    if s.is_empty() {
        return Err(ShapeError::missing_field(field));
    }
    Ok(s)
}

/// Required integer that fits the API's 32-bit ports
pub(crate) fn require_port(record: &Record, field: &str) -> Result<i32> {
    let n = record.require_int(field)?;
    i32::try_from(n)
        .map_err(|_| ShapeError::malformed_field(field, n.to_string(), "out of 32-bit range"))
}
