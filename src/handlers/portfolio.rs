use actix_web::{HttpResponse, web};
use mongodb::Database;
use serde::Deserialize;

use crate::db::{self, freelancers as freelancer_db, portfolio as portfolio_db};
use crate::errors::ApiError;
use crate::handlers::non_empty;
use crate::models::portfolio::PortfolioItem;

#[derive(Debug, Deserialize)]
pub struct PortfolioQuery {
    pub freelancer_id: Option<String>,
}

/// POST /portfolio — add a portfolio item for an existing freelancer.
pub async fn add_portfolio(
    db: web::Data<Database>,
    body: web::Json<PortfolioItem>,
) -> Result<HttpResponse, ApiError> {
    let item = body.into_inner();
    item.validate()?;

    let freelancer_id =
        db::parse_id(&item.freelancer_id).ok_or(ApiError::MalformedId("freelancer_id"))?;
    if !freelancer_db::freelancer_exists(db.get_ref(), freelancer_id).await? {
        return Err(ApiError::NotFound("Freelancer"));
    }

    let id = portfolio_db::insert_portfolio_item(db.get_ref(), &item).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "id": id })))
}

/// GET /portfolio — list portfolio items, optionally for one freelancer.
pub async fn list_portfolio(
    db: web::Data<Database>,
    query: web::Query<PortfolioQuery>,
) -> Result<HttpResponse, ApiError> {
    let items =
        portfolio_db::list_portfolio_items(db.get_ref(), non_empty(&query.freelancer_id)).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "items": items })))
}
