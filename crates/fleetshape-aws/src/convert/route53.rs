//! Route 53 record set conversions

use crate::model::route53::ResourceRecord;
use fleetshape_flatmap::Record;

/// One `{ value }` record per resource record, in API order
pub fn flatten_resource_records(records: &[ResourceRecord]) -> Vec<Record> {
    records
        .iter()
        .map(|r| Record::new().with("value", r.value.clone().unwrap_or_default()))
        .collect()
}
