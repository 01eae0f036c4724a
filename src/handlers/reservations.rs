use actix_web::{HttpResponse, web};
use mongodb::Database;
use serde::Deserialize;

use crate::db::{self, freelancers as freelancer_db, reservations as reservation_db};
use crate::errors::ApiError;
use crate::handlers::non_empty;
use crate::models::reservations::Reservation;

#[derive(Debug, Deserialize)]
pub struct ReservationQuery {
    pub freelancer_id: Option<String>,
    pub business_email: Option<String>,
}

/// POST /reservations — book a freelancer for a time window.
///
/// The overlap check and the insert are two separate store calls with no lock
/// between them, so two concurrent bookings for the same window can both pass
/// the check. Known gap at current booking volumes.
pub async fn create_reservation(
    db: web::Data<Database>,
    body: web::Json<Reservation>,
) -> Result<HttpResponse, ApiError> {
    let reservation = body.into_inner();

    let freelancer_id =
        db::parse_id(&reservation.freelancer_id).ok_or(ApiError::MalformedId("freelancer_id"))?;
    if !freelancer_db::freelancer_exists(db.get_ref(), freelancer_id).await? {
        return Err(ApiError::NotFound("Freelancer"));
    }

    let conflict = reservation_db::has_overlap(
        db.get_ref(),
        &reservation.freelancer_id,
        reservation.start_time,
        reservation.end_time,
    )
    .await?;
    if conflict {
        return Err(ApiError::Conflict(
            "Reservation overlaps with an existing booking".to_string(),
        ));
    }

    let id = reservation_db::insert_reservation(db.get_ref(), &reservation).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "id": id })))
}

/// GET /reservations — list reservations, optionally filtered.
pub async fn list_reservations(
    db: web::Data<Database>,
    query: web::Query<ReservationQuery>,
) -> Result<HttpResponse, ApiError> {
    let items = reservation_db::list_reservations(
        db.get_ref(),
        non_empty(&query.freelancer_id),
        non_empty(&query.business_email),
    )
    .await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "items": items })))
}
