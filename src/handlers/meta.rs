use actix_web::{HttpResponse, Responder, web};
use mongodb::Database;

use crate::db;

/// GET / — liveness message.
pub async fn read_root() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Designer Booking Backend Running",
    }))
}

/// GET /api/hello — greeting used by frontend smoke checks.
pub async fn hello() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Hello from the backend API!",
    }))
}

/// GET /test — report whether the document store is reachable. A storage
/// failure degrades the body rather than returning a 5xx.
pub async fn test_database(db: web::Data<Database>) -> impl Responder {
    let mut response = serde_json::json!({
        "backend": "running",
        "database": "not available",
        "database_url": if std::env::var("DATABASE_URL").is_ok() { "set" } else { "not set" },
        "database_name": if std::env::var("DATABASE_NAME").is_ok() { "set" } else { "not set" },
        "connection_status": "not connected",
        "collections": [],
    });

    match db::collection_names(db.get_ref()).await {
        Ok(mut collections) => {
            collections.truncate(10);
            response["database"] = serde_json::json!("connected");
            response["connection_status"] = serde_json::json!("connected");
            response["collections"] = serde_json::json!(collections);
        }
        Err(e) => {
            tracing::warn!("diagnostics: store unreachable: {e}");
            response["database"] = serde_json::json!(format!("error: {e}"));
        }
    }

    HttpResponse::Ok().json(response)
}
