//! Tests for the advertisement heading/designers business rule.
//!
//! Run with: `cargo test --test ad_rules_test`
use designer_booking_backend::errors::ApiError;
use designer_booking_backend::models::ads::{AdType, Advertisement, missing_designers};

fn business_ad(heading: &str, designers: &[&str]) -> Advertisement {
    Advertisement {
        ad_type: AdType::Business,
        heading: heading.to_string(),
        content: "Fresh landing page for spring".to_string(),
        designers: designers.iter().map(|s| s.to_string()).collect(),
        business_name: Some("Acme Co".to_string()),
        freelancer_id: None,
    }
}

#[test]
fn test_heading_naming_designer_passes() {
    let ad = business_ad("Ana's new page", &["Ana"]);
    assert!(ad.validate().is_ok());
}

#[test]
fn test_heading_missing_designer_is_rejected_by_name() {
    let ad = business_ad("A new page", &["Ana"]);
    match ad.validate() {
        Err(ApiError::BusinessRule(msg)) => {
            assert!(msg.contains("Ana"), "message should name the designer: {msg}");
        }
        other => panic!("expected a business-rule rejection, got {other:?}"),
    }
}

#[test]
fn test_matching_is_case_insensitive() {
    let ad = business_ad("Landing page by ANA and Bob", &["ana", "BOB"]);
    assert!(ad.validate().is_ok());
}

#[test]
fn test_empty_designers_is_rejected() {
    let ad = business_ad("A new page", &[]);
    assert!(matches!(ad.validate(), Err(ApiError::BusinessRule(_))));
}

#[test]
fn test_only_missing_names_are_reported() {
    let missing = missing_designers(
        "Page crafted by Ana",
        &["Ana".to_string(), "Bob".to_string(), "Cleo".to_string()],
    );
    assert_eq!(missing, vec!["Bob".to_string(), "Cleo".to_string()]);
}

#[test]
fn test_freelancer_ads_skip_the_rule() {
    let ad = Advertisement {
        ad_type: AdType::Freelancer,
        heading: "Available for branding work".to_string(),
        content: "Ten years of identity design".to_string(),
        designers: vec![],
        business_name: None,
        freelancer_id: Some("65f2a4b8c9d1e2f3a4b5c6d7".to_string()),
    };
    assert!(ad.validate().is_ok());
}

#[test]
fn test_ad_type_round_trips_as_lowercase() {
    let json = serde_json::to_string(&AdType::Business).unwrap();
    assert_eq!(json, r#""business""#);
    let result = serde_json::from_str::<AdType>(r#""agency""#);
    assert!(result.is_err());
}
