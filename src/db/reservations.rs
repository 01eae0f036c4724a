use chrono::{DateTime, Utc};
use mongodb::Database;
use mongodb::bson::{self, Document};
use serde::Deserialize;

use crate::db::{self, Filter, StoreError};
use crate::models::reservations::{Reservation, windows_overlap};

pub const COLLECTION: &str = "reservation";

/// The subset of a stored reservation needed for the overlap scan.
#[derive(Debug, Deserialize)]
struct BookedWindow {
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
}

/// Insert a new reservation.
pub async fn insert_reservation(
    db: &Database,
    reservation: &Reservation,
) -> Result<String, StoreError> {
    db::create_document(db, COLLECTION, reservation).await
}

/// Fetch reservations, optionally narrowed by freelancer and/or the booking
/// business's email.
pub async fn list_reservations(
    db: &Database,
    freelancer_id: Option<&str>,
    business_email: Option<&str>,
) -> Result<Vec<Document>, StoreError> {
    let mut filter = Filter::new();
    if let Some(freelancer_id) = freelancer_id {
        filter = filter.eq("freelancer_id", freelancer_id);
    }
    if let Some(business_email) = business_email {
        filter = filter.eq("business_email", business_email);
    }
    db::get_documents(db, COLLECTION, filter, None).await
}

/// Scan every reservation for the freelancer, regardless of status, and
/// report whether any booked window intersects `[start, end)`. Full scan per
/// booking attempt; fine at low per-freelancer volumes.
pub async fn has_overlap(
    db: &Database,
    freelancer_id: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<bool, StoreError> {
    let filter = Filter::new().eq("freelancer_id", freelancer_id);
    let documents = db::get_documents(db, COLLECTION, filter, None).await?;
    for document in documents {
        let window: BookedWindow = bson::from_document(document)?;
        if windows_overlap(window.start_time, window.end_time, start, end) {
            return Ok(true);
        }
    }
    Ok(false)
}
