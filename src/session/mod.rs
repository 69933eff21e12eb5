//! The login context.
//!
//! A [`Session`] is created by login, persisted by [`SessionStore`], and then
//! handed explicitly to the API client and every page that needs to know who
//! is signed in. Nothing reads it from ambient global state.

mod credentials;
mod store;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use credentials::SecureString;
pub use store::{SessionError, SessionStore};

/// The two roles the console distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Customer,
}

impl Role {
    /// Parse the role string returned by login.
    ///
    /// Only `CUSTOMER` (any case) maps to a customer; every other role the
    /// backend hands out gets the admin console.
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("customer") {
            Role::Customer
        } else {
            Role::Admin
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Customer => "CUSTOMER",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who is signed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i64,
    /// Set for customer logins; rentals and payments are keyed by it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub token: SecureString,
}

/// Raised when a session lacks the role a page or command requires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{area}' requires the {required} role (signed in as {actual})")]
pub struct AccessError {
    pub area: String,
    pub required: Role,
    pub actual: Role,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Identifier used for the customer's own rentals and payments.
    pub fn customer_key(&self) -> i64 {
        self.customer_id.unwrap_or(self.user_id)
    }

    pub fn require(&self, role: Role, area: &str) -> Result<(), AccessError> {
        if self.role == role {
            return Ok(());
        }
        Err(AccessError {
            area: area.to_string(),
            required: role,
            actual: self.role,
        })
    }

    pub fn require_admin(&self, area: &str) -> Result<(), AccessError> {
        self.require(Role::Admin, area)
    }

    /// Name to greet the user with.
    pub fn display_name(&self) -> String {
        match &self.full_name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("user #{}", self.user_id),
        }
    }
}
