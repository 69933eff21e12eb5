use super::dialog::DialogMode;
use super::page::{Access, ConsolePage};
use crate::api::ApiError;
use crate::hooks::BoxFuture;
use crate::resources::{
    BankAccounts, Branches, Customer, Customers, MaintenanceRecord, Payment, Payments, Rental,
    RentalStatus, Rentals, ResourceClient, Staff, Vehicles,
};
use crate::session::Session;

/// Shown when the server refuses a new rental, whatever the reason.
pub const RENTAL_REJECTED: &str = "Vehicle is not available or rental could not be created.";

impl ConsolePage for Vehicles {
    const TITLE: &'static str = "Vehicles";
    const READ: Access = Access::Everyone;
    const WRITE: Access = Access::AdminOnly;
}

impl ConsolePage for Customers {
    const TITLE: &'static str = "Customers";
    const READ: Access = Access::AdminOnly;
    const WRITE: Access = Access::AdminOnly;
}

impl ConsolePage for Staff {
    const TITLE: &'static str = "Staff";
    const READ: Access = Access::AdminOnly;
    const WRITE: Access = Access::AdminOnly;
}

impl ConsolePage for Branches {
    const TITLE: &'static str = "Branches";
    const READ: Access = Access::AdminOnly;
    const WRITE: Access = Access::AdminOnly;
}

impl ConsolePage for MaintenanceRecord {
    const TITLE: &'static str = "Maintenance";
    const READ: Access = Access::AdminOnly;
    const WRITE: Access = Access::AdminOnly;
}

impl ConsolePage for BankAccounts {
    const TITLE: &'static str = "Bank Accounts";
    const READ: Access = Access::Everyone;
    const WRITE: Access = Access::AdminOnly;
}

impl ConsolePage for Rentals {
    const TITLE: &'static str = "Rentals";
    const READ: Access = Access::Everyone;
    const WRITE: Access = Access::AdminOnly;
    const CREATE: Access = Access::Everyone;

    fn save_failed_alert(_mode: DialogMode) -> String {
        RENTAL_REJECTED.to_string()
    }

    /// Customers book for themselves; new rentals start out pending.
    fn prepare(record: &mut Rental, session: &Session) {
        if !session.is_admin() {
            record.customer = Some(Customer::reference(session.customer_key()));
        }
        if record.rental_id.is_none() && record.rental_status.is_none() {
            record.rental_status = Some(RentalStatus::Pending);
        }
    }

    /// Customers only see their own rentals.
    fn load(
        client: &ResourceClient<Self>,
        session: &Session,
    ) -> BoxFuture<Result<Vec<Rental>, ApiError>> {
        let client = client.clone();
        let customer = (!session.is_admin()).then_some(session.customer_key());
        Box::pin(async move {
            match customer {
                Some(customer_id) => client.by_user(customer_id).await,
                None => client.list().await,
            }
        })
    }
}

impl ConsolePage for Payments {
    const TITLE: &'static str = "Payments";
    const READ: Access = Access::Everyone;
    const WRITE: Access = Access::AdminOnly;
    const CREATE: Access = Access::Everyone;

    /// Customers only see payments against their own rentals.
    fn load(
        client: &ResourceClient<Self>,
        session: &Session,
    ) -> BoxFuture<Result<Vec<Payment>, ApiError>> {
        let client = client.clone();
        let customer = (!session.is_admin()).then_some(session.customer_key());
        Box::pin(async move {
            let payments = client.list().await?;
            Ok(match customer {
                Some(id) => payments
                    .into_iter()
                    .filter(|p| payment_customer(p) == Some(id))
                    .collect(),
                None => payments,
            })
        })
    }
}

fn payment_customer(payment: &Payment) -> Option<i64> {
    payment
        .rental
        .as_ref()?
        .customer
        .as_ref()?
        .customer_id
}
