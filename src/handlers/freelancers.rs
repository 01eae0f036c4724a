use actix_web::{HttpResponse, web};
use mongodb::Database;
use serde::Deserialize;

use crate::db::freelancers as freelancer_db;
use crate::errors::ApiError;
use crate::handlers::non_empty;
use crate::models::freelancers::Freelancer;

#[derive(Debug, Deserialize)]
pub struct FreelancerQuery {
    /// Case-insensitive substring match against the skills list.
    pub skill: Option<String>,
}

/// POST /freelancers — register a freelancer profile.
pub async fn create_freelancer(
    db: web::Data<Database>,
    body: web::Json<Freelancer>,
) -> Result<HttpResponse, ApiError> {
    let freelancer = body.into_inner();
    freelancer.validate()?;
    let id = freelancer_db::insert_freelancer(db.get_ref(), &freelancer).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "id": id })))
}

/// GET /freelancers — list freelancers, optionally filtered by skill.
pub async fn list_freelancers(
    db: web::Data<Database>,
    query: web::Query<FreelancerQuery>,
) -> Result<HttpResponse, ApiError> {
    let items = freelancer_db::list_freelancers(db.get_ref(), non_empty(&query.skill)).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "items": items })))
}
