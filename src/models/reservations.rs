use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reservation lifecycle state, stored as a lowercase string. Set at creation;
/// no transition endpoints exist in this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

/// A business booking a freelancer for a time window.
/// Stored in the `reservation` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub business_name: String,
    pub business_email: String,
    pub freelancer_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: ReservationStatus,
}

/// Half-open interval intersection: `[a_start, a_end)` and `[b_start, b_end)`
/// overlap iff each starts before the other ends. Touching endpoints
/// (one window ending exactly when the other starts) do not overlap.
pub fn windows_overlap(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && b_start < a_end
}
