use actix_web::{HttpResponse, web};
use mongodb::Database;
use serde::Deserialize;

use crate::db::ads as ad_db;
use crate::errors::ApiError;
use crate::handlers::non_empty;
use crate::models::ads::Advertisement;

#[derive(Debug, Deserialize)]
pub struct AdQuery {
    pub ad_type: Option<String>,
}

/// POST /ads — publish an advertisement.
pub async fn create_ad(
    db: web::Data<Database>,
    body: web::Json<Advertisement>,
) -> Result<HttpResponse, ApiError> {
    let ad = body.into_inner();
    ad.validate()?;
    let id = ad_db::insert_ad(db.get_ref(), &ad).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "id": id })))
}

/// GET /ads — list up to 50 ads, optionally by ad type.
pub async fn list_ads(
    db: web::Data<Database>,
    query: web::Query<AdQuery>,
) -> Result<HttpResponse, ApiError> {
    let items = ad_db::list_ads(db.get_ref(), non_empty(&query.ad_type)).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "items": items })))
}
