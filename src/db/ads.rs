use mongodb::Database;
use mongodb::bson::Document;

use crate::db::{self, Filter, StoreError};
use crate::models::ads::Advertisement;

pub const COLLECTION: &str = "advertisement";

/// Listings are capped; ads are browsed, not paged.
const LIST_LIMIT: i64 = 50;

/// Insert a new advertisement.
pub async fn insert_ad(db: &Database, ad: &Advertisement) -> Result<String, StoreError> {
    db::create_document(db, COLLECTION, ad).await
}

/// Fetch up to 50 ads, optionally narrowed to one ad type.
pub async fn list_ads(db: &Database, ad_type: Option<&str>) -> Result<Vec<Document>, StoreError> {
    let mut filter = Filter::new();
    if let Some(ad_type) = ad_type {
        filter = filter.eq("ad_type", ad_type);
    }
    db::get_documents(db, COLLECTION, filter, Some(LIST_LIMIT)).await
}
