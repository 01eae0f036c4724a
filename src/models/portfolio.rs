use serde::{Deserialize, Serialize};

use crate::errors::ApiError;
use crate::models::validate_url;

/// A single portfolio entry belonging to one freelancer.
/// Stored in the `portfolioitem` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub freelancer_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub project_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl PortfolioItem {
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(project_url) = &self.project_url {
            validate_url("project_url", project_url)?;
        }
        if let Some(image_url) = &self.image_url {
            validate_url("image_url", image_url)?;
        }
        Ok(())
    }
}
