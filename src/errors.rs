use actix_web::{HttpResponse, http::StatusCode};
use thiserror::Error;

use crate::db::StoreError;

/// Error taxonomy for the API layer. Every variant maps to one HTTP status;
/// handlers return `Result<HttpResponse, ApiError>` and propagate with `?`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body or query string failed schema validation.
    #[error("{0}")]
    Validation(String),

    /// A referencing `*_id` field is not a syntactically valid identifier.
    #[error("Invalid {0}")]
    MalformedId(&'static str),

    /// A well-formed identifier that resolves to no document.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A domain rule was violated (ad heading/designers correlation).
    #[error("{0}")]
    BusinessRule(String),

    /// The write would collide with existing state (reservation overlap).
    #[error("{0}")]
    Conflict(String),

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

impl actix_web::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MalformedId(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BusinessRule(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Storage(e) = self {
            tracing::error!("storage failure: {e}");
        }
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string(),
        }))
    }
}
