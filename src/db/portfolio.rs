use mongodb::Database;
use mongodb::bson::Document;

use crate::db::{self, Filter, StoreError};
use crate::models::portfolio::PortfolioItem;

pub const COLLECTION: &str = "portfolioitem";

/// Insert a new portfolio item.
pub async fn insert_portfolio_item(
    db: &Database,
    item: &PortfolioItem,
) -> Result<String, StoreError> {
    db::create_document(db, COLLECTION, item).await
}

/// Fetch all portfolio items, optionally for a single freelancer.
pub async fn list_portfolio_items(
    db: &Database,
    freelancer_id: Option<&str>,
) -> Result<Vec<Document>, StoreError> {
    let mut filter = Filter::new();
    if let Some(freelancer_id) = freelancer_id {
        filter = filter.eq("freelancer_id", freelancer_id);
    }
    db::get_documents(db, COLLECTION, filter, None).await
}
