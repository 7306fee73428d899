use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::hhmm;

/// One fixed subdivision of the daily booking window, with the appointment
/// blocking it (if any).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotStatus {
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub available: bool,
    pub appointment: Option<SlotConflict>,
}

/// Identifying fields of the appointment that blocks a slot. A slot reports
/// at most one blocker even when several appointments overlap it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotConflict {
    pub title: String,
    pub name: String,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub date: NaiveDate,
    pub slots: Vec<SlotStatus>,
}

/// Compact day listing returned by the occupied-slots endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupiedSlot {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckAvailabilityResponse {
    pub available: bool,
    pub checked_at: DateTime<Utc>,
}
