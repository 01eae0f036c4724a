pub mod ads;
pub mod forum;
pub mod freelancers;
pub mod portfolio;
pub mod reservations;

use url::Url;

use crate::errors::ApiError;

/// Validate that a URL-typed field holds an absolute http(s) URL.
pub(crate) fn validate_url(field: &str, value: &str) -> Result<(), ApiError> {
    match Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        _ => Err(ApiError::Validation(format!(
            "{field} must be a valid http(s) URL"
        ))),
    }
}
