use serde::{Deserialize, Serialize};

use super::{Resource, ResourceClient};
use crate::api::ApiError;

/// A company account customers pay into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub account_holder_name: Option<String>,
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

fn active_by_default() -> bool {
    true
}

impl Default for BankAccount {
    fn default() -> Self {
        Self {
            account_id: None,
            bank_name: None,
            branch: None,
            account_number: None,
            account_holder_name: None,
            account_type: None,
            is_active: true,
        }
    }
}

pub struct BankAccounts;

impl Resource for BankAccounts {
    const PATH: &'static str = "/bank-accounts";
    const LABEL: &'static str = "bank account";
    type Record = BankAccount;

    fn id(record: &BankAccount) -> Option<i64> {
        record.account_id
    }
}

impl ResourceClient<BankAccounts> {
    /// Accounts currently offered to customers for transfers.
    pub async fn active(&self) -> Result<Vec<BankAccount>, ApiError> {
        self.api().get("/bank-accounts/active").await
    }
}
