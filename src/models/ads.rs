use serde::{Deserialize, Serialize};

use crate::errors::ApiError;

/// Who the ad is placed by, stored as a lowercase string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdType {
    Business,
    Freelancer,
}

/// An advertisement for a page or service. Stored in the `advertisement`
/// collection. The optional freelancer reference is deliberately unvalidated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Advertisement {
    pub ad_type: AdType,
    pub heading: String,
    pub content: String,
    /// Names of the designers responsible for the advertised page.
    #[serde(default)]
    pub designers: Vec<String>,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub freelancer_id: Option<String>,
}

impl Advertisement {
    /// Business ads must credit their designers: the list must be non-empty
    /// and every name must appear in the heading (case-insensitive).
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.ad_type != AdType::Business {
            return Ok(());
        }
        if self.designers.is_empty() {
            return Err(ApiError::BusinessRule(
                "Business ads must include designers responsible".to_string(),
            ));
        }
        let missing = missing_designers(&self.heading, &self.designers);
        if !missing.is_empty() {
            return Err(ApiError::BusinessRule(format!(
                "Heading must include designers: {}",
                missing.join(", ")
            )));
        }
        Ok(())
    }
}

/// Designer names that do not appear case-insensitively in the heading.
pub fn missing_designers(heading: &str, designers: &[String]) -> Vec<String> {
    let heading = heading.to_lowercase();
    designers
        .iter()
        .filter(|name| !heading.contains(&name.to_lowercase()))
        .cloned()
        .collect()
}
