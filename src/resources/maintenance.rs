use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Resource, Vehicle};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maintenance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_id: Option<i64>,
    #[serde(default)]
    pub vehicle: Option<Vehicle>,
    #[serde(default)]
    pub maintenance_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub next_service_date: Option<NaiveDate>,
}

pub struct MaintenanceRecord;

impl Resource for MaintenanceRecord {
    const PATH: &'static str = "/maintenances";
    const LABEL: &'static str = "maintenance record";
    type Record = Maintenance;

    fn id(record: &Maintenance) -> Option<i64> {
        record.maintenance_id
    }
}
