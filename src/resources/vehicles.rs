use serde::{Deserialize, Serialize};

use super::{server_enum, Branch, Resource, ResourceClient, ViewKey, ViewRow};
use crate::api::ApiError;

server_enum!(
    /// Whether a vehicle can be rented right now.
    AvailabilityStatus, "availability status" {
        Available,
        Rented,
        Maintenance,
    }
);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<i64>,
    #[serde(default)]
    pub vehicle_type: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub registration_no: Option<String>,
    #[serde(default)]
    pub daily_rate: Option<f64>,
    #[serde(default)]
    pub availability_status: Option<AvailabilityStatus>,
    #[serde(default)]
    pub branch: Option<Branch>,
}

impl Vehicle {
    pub fn reference(id: i64) -> Self {
        Self {
            vehicle_id: Some(id),
            ..Self::default()
        }
    }

    /// `Toyota Axio (CAB-1234)` style label.
    pub fn label(&self) -> String {
        let name = [self.brand.as_deref(), self.model.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        match &self.registration_no {
            Some(reg) if !name.is_empty() => format!("{} ({})", name, reg),
            Some(reg) => reg.clone(),
            None => name,
        }
    }
}

pub struct Vehicles;

impl Resource for Vehicles {
    const PATH: &'static str = "/vehicles";
    const LABEL: &'static str = "vehicle";
    type Record = Vehicle;

    fn id(record: &Vehicle) -> Option<i64> {
        record.vehicle_id
    }
}

impl Vehicles {
    /// Columns of the available-vehicles view.
    pub const VIEW_COLUMNS: &'static [ViewKey] = &[
        ViewKey::new("vehicleType", &["type", "Type"]),
        ViewKey::new("brand", &[]),
        ViewKey::new("model", &[]),
        ViewKey::new("registrationNo", &["registration", "Registration"]),
        ViewKey::new("dailyRate", &["rate", "Rate"]),
        ViewKey::new("branchName", &["branch", "Branch"]),
        ViewKey::new("availabilityStatus", &["status", "Status"]),
    ];
}

impl ResourceClient<Vehicles> {
    /// Vehicles that can be rented now, as view rows.
    pub async fn available(&self) -> Result<Vec<ViewRow>, ApiError> {
        self.api().get("/vehicles/available").await
    }
}
