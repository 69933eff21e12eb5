use chrono::NaiveDate;
use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};

use super::{server_enum, Rental, Resource, ResourceClient};
use crate::api::{ApiError, Download, FileUpload};

server_enum!(
    PaymentMethod, "payment method" {
        Cash,
        Card,
        Online,
    }
);

server_enum!(
    PaymentStatus, "payment status" {
        Paid,
        Pending,
        Failed,
    }
);

/// Multipart field carrying the payment JSON on submission.
pub const PAYMENT_PART: &str = "payment";
/// Multipart field carrying the slip file on submission.
pub const SLIP_PART: &str = "slipFile";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<i64>,
    #[serde(default)]
    pub rental: Option<Rental>,
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub payment_status: Option<PaymentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slip_file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
}

impl Payment {
    /// Local name for a downloaded slip when the server sends no hint.
    pub fn fallback_slip_name(id: i64) -> String {
        format!("payment-slip-{}", id)
    }
}

/// Body of an admin status decision.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub payment_status: PaymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
}

pub struct Payments;

impl Resource for Payments {
    const PATH: &'static str = "/payments";
    const LABEL: &'static str = "payment";
    type Record = Payment;

    fn id(record: &Payment) -> Option<i64> {
        record.payment_id
    }
}

impl ResourceClient<Payments> {
    pub async fn update_status(
        &self,
        id: i64,
        status: PaymentStatus,
        admin_notes: Option<String>,
    ) -> Result<Payment, ApiError> {
        let body = StatusUpdate {
            payment_status: status,
            admin_notes,
        };
        let payment = self
            .api()
            .put(&format!("/payments/{}/status", id), &body)
            .await?;
        tracing::info!(id, status = %status, "Payment status updated");
        Ok(payment)
    }

    /// Create a payment together with its bank slip in one multipart request.
    pub async fn submit_with_slip(&self, payment: &Payment, slip: FileUpload) -> Result<Payment, ApiError> {
        let form = Form::new()
            .part(PAYMENT_PART, crate::api::json_part(payment)?)
            .part(SLIP_PART, slip.into_part()?);
        let payload = self.api().upload(Payments::PATH, form).await?;
        match payload.into_option() {
            Some(created) => {
                tracing::info!(id = ?Payments::id(&created), "Payment submitted with slip");
                Ok(created)
            }
            None => Err(ApiError::EmptyBody {
                url: self.api().url(Payments::PATH),
            }),
        }
    }

    pub async fn upload_slip(&self, id: i64, slip: FileUpload) -> Result<Option<Payment>, ApiError> {
        let payload = self
            .api()
            .upload_file(&format!("/payments/{}/upload-slip", id), "file", slip)
            .await?;
        tracing::info!(id, "Uploaded payment slip");
        Ok(payload.into_option())
    }

    /// Fetch the slip file; named `payment-slip-{id}` when the server gives no name.
    pub async fn download_slip(&self, id: i64) -> Result<Download, ApiError> {
        self.api()
            .download(
                &format!("/payments/{}/download-slip", id),
                &Payment::fallback_slip_name(id),
            )
            .await
    }
}
