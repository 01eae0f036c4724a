use serde::{Deserialize, Serialize};

use crate::errors::ApiError;
use crate::models::validate_url;

/// One entry in a freelancer's weekly availability calendar,
/// e.g. `{day: "Mon", start: "09:00", end: "17:00", timezone: "UTC"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub day: String,
    pub start: String,
    pub end: String,
    pub timezone: String,
}

/// A freelance designer profile. Stored in the `freelancer` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Freelancer {
    pub name: String,
    pub email: String,
    /// Skill tags like frontend, backend, ux, devops.
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Rate per hour in USD.
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub portfolio_links: Vec<String>,
    #[serde(default)]
    pub availability: Vec<AvailabilitySlot>,
}

impl Freelancer {
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(rate) = self.hourly_rate {
            if rate < 0.0 {
                return Err(ApiError::Validation(
                    "hourly_rate must be non-negative".to_string(),
                ));
            }
        }
        if let Some(avatar_url) = &self.avatar_url {
            validate_url("avatar_url", avatar_url)?;
        }
        for link in &self.portfolio_links {
            validate_url("portfolio_links", link)?;
        }
        Ok(())
    }
}
