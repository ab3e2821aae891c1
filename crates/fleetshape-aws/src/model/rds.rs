//! RDS parameter group shapes

use serde::{Deserialize, Serialize};

/// DB parameter group entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Parameter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_value: Option<String>,
    /// `immediate` or `pending-reboot`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_method: Option<String>,
}
