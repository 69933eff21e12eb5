//! Typed endpoint maps, one module per server entity.
//!
//! Every entity gets the same five CRUD calls through [`ResourceClient`];
//! entity-specific extras (approve, upload-slip, ...) are inherent methods on
//! `ResourceClient<ThatEntity>` in the entity's own module.

mod audit;
mod auth;
mod bank_accounts;
mod branches;
mod customers;
mod maintenance;
mod payments;
mod rentals;
mod staff;
mod vehicles;
mod view;

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::{ApiClient, ApiError};

pub use audit::AuditEntry;
pub use auth::{AuthClient, LoginResponse, SignupRequest};
pub use bank_accounts::{BankAccount, BankAccounts};
pub use branches::{Branch, Branches};
pub use customers::{Customer, Customers};
pub use maintenance::{Maintenance, MaintenanceRecord};
pub use payments::{Payment, PaymentMethod, PaymentStatus, Payments, StatusUpdate};
pub use rentals::{AmountQuote, Rental, RentalStatus, Rentals};
pub use staff::{Staff, StaffMember};
pub use vehicles::{AvailabilityStatus, Vehicle, Vehicles};
pub use view::{ViewKey, ViewRow};

/// A server-managed entity type and where it lives.
pub trait Resource: Send + Sync + 'static {
    /// Collection path, e.g. `/vehicles`.
    const PATH: &'static str;
    /// Singular human name used in logs and alerts.
    const LABEL: &'static str;

    type Record: Serialize + DeserializeOwned + Clone + PartialEq + Send + Sync + 'static;

    /// Server-assigned identifier of a record, absent before creation.
    fn id(record: &Self::Record) -> Option<i64>;
}

/// CRUD calls for one resource.
pub struct ResourceClient<R> {
    api: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R> fmt::Debug for ResourceClient<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("api", &self.api)
            .finish()
    }
}

impl<R: Resource> ResourceClient<R> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            _resource: PhantomData,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub(crate) fn item_path(id: i64) -> String {
        format!("{}/{}", R::PATH, id)
    }

    pub async fn list(&self) -> Result<Vec<R::Record>, ApiError> {
        self.api.get(R::PATH).await
    }

    pub async fn get(&self, id: i64) -> Result<R::Record, ApiError> {
        self.api.get(&Self::item_path(id)).await
    }

    pub async fn create(&self, record: &R::Record) -> Result<R::Record, ApiError> {
        let created: R::Record = self.api.post(R::PATH, record).await?;
        tracing::info!(resource = R::LABEL, id = ?R::id(&created), "Created");
        Ok(created)
    }

    pub async fn update(&self, id: i64, record: &R::Record) -> Result<R::Record, ApiError> {
        let updated = self.api.put(&Self::item_path(id), record).await?;
        tracing::info!(resource = R::LABEL, id, "Updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&Self::item_path(id)).await?;
        tracing::info!(resource = R::LABEL, id, "Deleted");
        Ok(())
    }
}

/// Raised when a status string matches none of an enum's variants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

/// Status enums are serialized exactly as the server spells them.
macro_rules! server_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::resources::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| $crate::resources::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

pub(crate) use server_enum;
