use super::{Rentals, ResourceClient, ViewKey, ViewRow};
use crate::api::ApiError;

/// One row of the rental audit trail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditEntry {
    pub id: Option<i64>,
    pub rental_id: Option<i64>,
    pub action: String,
    pub changed_by: String,
    pub changed_at: String,
}

impl AuditEntry {
    pub const ID: ViewKey = ViewKey::new("id", &["ID", "auditId"]);
    pub const RENTAL_ID: ViewKey = ViewKey::new("rentalId", &["rental_id", "Rental ID"]);
    pub const ACTION: ViewKey = ViewKey::new("action", &[]);
    pub const CHANGED_BY: ViewKey = ViewKey::new("changedBy", &["changed_by"]);
    pub const CHANGED_AT: ViewKey = ViewKey::new("changedAt", &["changed_at"]);

    pub const COLUMNS: &'static [ViewKey] = &[
        Self::ID,
        Self::RENTAL_ID,
        Self::ACTION,
        Self::CHANGED_BY,
        Self::CHANGED_AT,
    ];

    pub fn from_row(row: &ViewRow) -> Self {
        Self {
            id: row.i64(&Self::ID),
            rental_id: row.i64(&Self::RENTAL_ID),
            action: row.text(&Self::ACTION),
            changed_by: row.text(&Self::CHANGED_BY),
            changed_at: row.text(&Self::CHANGED_AT),
        }
    }
}

impl ResourceClient<Rentals> {
    /// The rental audit trail, newest entries as the server orders them.
    pub async fn audit(&self) -> Result<Vec<AuditEntry>, ApiError> {
        let rows: Vec<ViewRow> = self.api().get("/rentals/audit/view").await?;
        Ok(rows.iter().map(AuditEntry::from_row).collect())
    }
}
