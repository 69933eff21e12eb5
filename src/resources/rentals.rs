use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{server_enum, Customer, Resource, ResourceClient, StaffMember, Vehicle, ViewKey, ViewRow};
use crate::api::{ApiError, FileUpload};

server_enum!(
    RentalStatus, "rental status" {
        Pending,
        Ongoing,
        Approved,
        Rejected,
        Completed,
        Cancelled,
    }
);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rental_id: Option<i64>,
    #[serde(default)]
    pub customer: Option<Customer>,
    #[serde(default)]
    pub vehicle: Option<Vehicle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff: Option<StaffMember>,
    #[serde(default)]
    pub rental_date: Option<NaiveDate>,
    #[serde(default)]
    pub return_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rental_status: Option<RentalStatus>,
}

impl Rental {
    pub fn reference(id: i64) -> Self {
        Self {
            rental_id: Some(id),
            ..Self::default()
        }
    }
}

/// Body of a price quote request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountQuote {
    pub vehicle_id: i64,
    pub rental_date: NaiveDate,
    pub return_date: NaiveDate,
}

pub struct Rentals;

impl Resource for Rentals {
    const PATH: &'static str = "/rentals";
    const LABEL: &'static str = "rental";
    type Record = Rental;

    fn id(record: &Rental) -> Option<i64> {
        record.rental_id
    }
}

impl Rentals {
    /// Columns of the active-rentals view.
    pub const VIEW_COLUMNS: &'static [ViewKey] = &[
        ViewKey::new("rentalId", &["id", "ID"]),
        ViewKey::new("customerName", &["customer", "Customer"]),
        ViewKey::new("registrationNo", &["vehicle", "Vehicle", "registration", "Registration"]),
        ViewKey::new("rentalDate", &["startDate", "Start Date"]),
        ViewKey::new("returnDate", &["endDate", "End Date"]),
        ViewKey::new("rentalStatus", &["status", "Status"]),
    ];
}

impl ResourceClient<Rentals> {
    /// Rentals owned by one customer, keyed by customer id despite the path.
    pub async fn by_user(&self, customer_id: i64) -> Result<Vec<Rental>, ApiError> {
        self.api().get(&format!("/rentals/user/{}", customer_id)).await
    }

    pub async fn active_view(&self) -> Result<Vec<ViewRow>, ApiError> {
        self.api().get("/rentals/active-view").await
    }

    pub async fn approve(&self, id: i64) -> Result<Rental, ApiError> {
        let rental = self.api().put_empty(&format!("/rentals/{}/approve", id)).await?;
        tracing::info!(id, "Rental approved");
        Ok(rental)
    }

    pub async fn reject(&self, id: i64) -> Result<Rental, ApiError> {
        let rental = self.api().put_empty(&format!("/rentals/{}/reject", id)).await?;
        tracing::info!(id, "Rental rejected");
        Ok(rental)
    }

    pub async fn complete(&self, id: i64) -> Result<Rental, ApiError> {
        let rental = self.api().post_empty(&format!("/rentals/{}/complete", id)).await?;
        tracing::info!(id, "Rental completed");
        Ok(rental)
    }

    /// Price the server would charge for renting `vehicle_id` over the range.
    pub async fn calculate_amount(
        &self,
        vehicle_id: i64,
        rental_date: NaiveDate,
        return_date: NaiveDate,
    ) -> Result<f64, ApiError> {
        let quote = AmountQuote {
            vehicle_id,
            rental_date,
            return_date,
        };
        self.api().post("/rentals/calculate-amount", &quote).await
    }

    /// Attach a proof document to a rental.
    pub async fn upload_proof(&self, id: i64, file: FileUpload) -> Result<Option<Rental>, ApiError> {
        let payload = self
            .api()
            .upload_file(&format!("/rentals/{}/upload-proof", id), "file", file)
            .await?;
        tracing::info!(id, "Uploaded rental proof");
        Ok(payload.into_option())
    }
}
