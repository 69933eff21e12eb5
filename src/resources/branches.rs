use serde::{Deserialize, Serialize};

use super::Resource;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<i64>,
    #[serde(default)]
    pub branch_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub contact_no: Option<String>,
    #[serde(default)]
    pub manager: Option<String>,
}

impl Branch {
    /// A bare `{"branchId": id}` reference for nesting in other records.
    pub fn reference(id: i64) -> Self {
        Self {
            branch_id: Some(id),
            ..Self::default()
        }
    }
}

pub struct Branches;

impl Resource for Branches {
    const PATH: &'static str = "/branches";
    const LABEL: &'static str = "branch";
    type Record = Branch;

    fn id(record: &Branch) -> Option<i64> {
        record.branch_id
    }
}
