use serde::{Deserialize, Serialize};

use crate::model::amount::Amount;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// Pre-aggregated dashboard metrics. Nothing here is computed client-side.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_bookings: u64,
    #[serde(default)]
    pub total_students: u64,
    #[serde(default)]
    pub total_trainers: u64,
    #[serde(default)]
    pub total_schools: u64,
    #[serde(default)]
    pub revenue: Amount,
    #[serde(default)]
    pub bookings_by_month: Vec<SeriesPoint>,
    #[serde(default)]
    pub bookings_by_status: Vec<SeriesPoint>,
}
