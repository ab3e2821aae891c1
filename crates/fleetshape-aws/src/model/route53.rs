//! Route 53 record set shapes

use serde::{Deserialize, Serialize};

/// Single value of a record set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}
