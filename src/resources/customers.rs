use serde::{Deserialize, Serialize};

use super::Resource;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub nic_passport_no: Option<String>,
    #[serde(default)]
    pub phone_no: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub license_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Only ever sent; omitted when unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Customer {
    pub fn reference(id: i64) -> Self {
        Self {
            customer_id: Some(id),
            ..Self::default()
        }
    }
}

pub struct Customers;

impl Resource for Customers {
    const PATH: &'static str = "/customers";
    const LABEL: &'static str = "customer";
    type Record = Customer;

    fn id(record: &Customer) -> Option<i64> {
        record.customer_id
    }
}
