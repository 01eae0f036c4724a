use actix_web::{HttpResponse, web};
use mongodb::Database;
use serde::Deserialize;

use crate::db::{self, forum as forum_db};
use crate::errors::ApiError;
use crate::handlers::non_empty;
use crate::models::forum::{ForumPost, ForumThread};

#[derive(Debug, Deserialize)]
pub struct ThreadQuery {
    /// Case-insensitive substring match against the tags list.
    pub tag: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PostQuery {
    pub thread_id: String,
}

/// POST /forum/threads — open a discussion thread.
pub async fn create_thread(
    db: web::Data<Database>,
    body: web::Json<ForumThread>,
) -> Result<HttpResponse, ApiError> {
    let id = forum_db::insert_thread(db.get_ref(), &body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "id": id })))
}

/// GET /forum/threads — list up to 50 threads, optionally by tag.
pub async fn list_threads(
    db: web::Data<Database>,
    query: web::Query<ThreadQuery>,
) -> Result<HttpResponse, ApiError> {
    let items = forum_db::list_threads(db.get_ref(), non_empty(&query.tag)).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "items": items })))
}

/// POST /forum/posts — reply within an existing thread.
pub async fn create_post(
    db: web::Data<Database>,
    body: web::Json<ForumPost>,
) -> Result<HttpResponse, ApiError> {
    let post = body.into_inner();

    let thread_id = db::parse_id(&post.thread_id).ok_or(ApiError::MalformedId("thread_id"))?;
    if !forum_db::thread_exists(db.get_ref(), thread_id).await? {
        return Err(ApiError::NotFound("Thread"));
    }

    let id = forum_db::insert_post(db.get_ref(), &post).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "id": id })))
}

/// GET /forum/posts?thread_id= — list up to 200 posts for a thread.
/// The thread id is required; a missing parameter is a 422.
pub async fn list_posts(
    db: web::Data<Database>,
    query: web::Query<PostQuery>,
) -> Result<HttpResponse, ApiError> {
    let items = forum_db::list_posts(db.get_ref(), &query.thread_id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "items": items })))
}
