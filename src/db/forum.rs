use mongodb::Database;
use mongodb::bson::{Document, oid::ObjectId};

use crate::db::{self, Filter, StoreError};
use crate::models::forum::{ForumPost, ForumThread};

pub const THREAD_COLLECTION: &str = "forumthread";
pub const POST_COLLECTION: &str = "forumpost";

const THREAD_LIST_LIMIT: i64 = 50;
const POST_LIST_LIMIT: i64 = 200;

/// Insert a new discussion thread.
pub async fn insert_thread(db: &Database, thread: &ForumThread) -> Result<String, StoreError> {
    db::create_document(db, THREAD_COLLECTION, thread).await
}

/// Fetch up to 50 threads, optionally narrowed to a tag substring.
pub async fn list_threads(db: &Database, tag: Option<&str>) -> Result<Vec<Document>, StoreError> {
    let mut filter = Filter::new();
    if let Some(tag) = tag {
        filter = filter.contains_ci("tags", tag);
    }
    db::get_documents(db, THREAD_COLLECTION, filter, Some(THREAD_LIST_LIMIT)).await
}

/// Check that a thread document exists.
pub async fn thread_exists(db: &Database, id: ObjectId) -> Result<bool, StoreError> {
    db::document_exists(db, THREAD_COLLECTION, id).await
}

/// Insert a new post into a thread.
pub async fn insert_post(db: &Database, post: &ForumPost) -> Result<String, StoreError> {
    db::create_document(db, POST_COLLECTION, post).await
}

/// Fetch up to 200 posts for one thread.
pub async fn list_posts(db: &Database, thread_id: &str) -> Result<Vec<Document>, StoreError> {
    let filter = Filter::new().eq("thread_id", thread_id);
    db::get_documents(db, POST_COLLECTION, filter, Some(POST_LIST_LIMIT)).await
}
