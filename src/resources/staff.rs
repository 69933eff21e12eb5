use serde::{Deserialize, Serialize};

use super::{Branch, Resource};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<i64>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub phone_no: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub branch: Option<Branch>,
}

impl StaffMember {
    pub fn reference(id: i64) -> Self {
        Self {
            staff_id: Some(id),
            ..Self::default()
        }
    }
}

pub struct Staff;

impl Resource for Staff {
    const PATH: &'static str = "/staff";
    const LABEL: &'static str = "staff member";
    type Record = StaffMember;

    fn id(record: &StaffMember) -> Option<i64> {
        record.staff_id
    }
}
