use mongodb::Database;
use mongodb::bson::{Document, oid::ObjectId};

use crate::db::{self, Filter, StoreError};
use crate::models::freelancers::Freelancer;

pub const COLLECTION: &str = "freelancer";

/// Insert a new freelancer profile.
pub async fn insert_freelancer(
    db: &Database,
    freelancer: &Freelancer,
) -> Result<String, StoreError> {
    db::create_document(db, COLLECTION, freelancer).await
}

/// Fetch all freelancers, optionally narrowed to those listing a skill that
/// contains `skill` case-insensitively.
pub async fn list_freelancers(
    db: &Database,
    skill: Option<&str>,
) -> Result<Vec<Document>, StoreError> {
    let mut filter = Filter::new();
    if let Some(skill) = skill {
        filter = filter.contains_ci("skills", skill);
    }
    db::get_documents(db, COLLECTION, filter, None).await
}

/// Check that a freelancer document exists.
pub async fn freelancer_exists(db: &Database, id: ObjectId) -> Result<bool, StoreError> {
    db::document_exists(db, COLLECTION, id).await
}
