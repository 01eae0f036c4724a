//! Tests for schema validation, identifier parsing, and the filter builder.
//!
//! Run with: `cargo test --test validation_test`
use actix_web::web::Query;
use mongodb::bson::doc;

use designer_booking_backend::db::{Filter, parse_id};
use designer_booking_backend::handlers::freelancers::FreelancerQuery;
use designer_booking_backend::handlers::non_empty;
use designer_booking_backend::errors::ApiError;
use designer_booking_backend::models::forum::{AuthorType, ForumThread};
use designer_booking_backend::models::freelancers::Freelancer;
use designer_booking_backend::models::portfolio::PortfolioItem;

fn freelancer() -> Freelancer {
    serde_json::from_str(
        r#"{
            "name": "Ana Marin",
            "email": "ana@example.com",
            "skills": ["UX Design", "frontend"]
        }"#,
    )
    .expect("minimal freelancer should deserialize")
}

#[test]
fn test_minimal_freelancer_validates() {
    let f = freelancer();
    assert!(f.validate().is_ok());
    assert!(f.hourly_rate.is_none());
    assert!(f.availability.is_empty());
}

#[test]
fn test_negative_hourly_rate_is_rejected() {
    let mut f = freelancer();
    f.hourly_rate = Some(-10.0);
    assert!(matches!(f.validate(), Err(ApiError::Validation(_))));
}

#[test]
fn test_zero_hourly_rate_is_allowed() {
    let mut f = freelancer();
    f.hourly_rate = Some(0.0);
    assert!(f.validate().is_ok());
}

#[test]
fn test_non_http_urls_are_rejected() {
    let mut f = freelancer();
    f.avatar_url = Some("not a url".to_string());
    assert!(matches!(f.validate(), Err(ApiError::Validation(_))));

    f.avatar_url = Some("ftp://example.com/avatar.png".to_string());
    assert!(matches!(f.validate(), Err(ApiError::Validation(_))));

    f.avatar_url = Some("https://example.com/avatar.png".to_string());
    f.portfolio_links = vec!["https://dribbble.example/ana".to_string()];
    assert!(f.validate().is_ok());
}

#[test]
fn test_portfolio_item_url_fields_are_checked() {
    let item = PortfolioItem {
        freelancer_id: "65f2a4b8c9d1e2f3a4b5c6d7".to_string(),
        title: "Brand refresh".to_string(),
        description: None,
        project_url: Some("nope".to_string()),
        image_url: None,
        tags: vec![],
    };
    assert!(matches!(item.validate(), Err(ApiError::Validation(_))));
}

#[test]
fn test_thread_author_type_defaults_to_guest() {
    let thread: ForumThread = serde_json::from_str(
        r#"{
            "title": "Rates for logo work?",
            "content": "What do people charge these days?",
            "author_name": "curious-biz"
        }"#,
    )
    .expect("thread without author_type should deserialize");
    assert_eq!(thread.author_type, AuthorType::Guest);
    assert!(thread.tags.is_empty());
}

#[test]
fn test_well_formed_ids_parse() {
    assert!(parse_id("65f2a4b8c9d1e2f3a4b5c6d7").is_some());
}

#[test]
fn test_malformed_ids_do_not_parse() {
    assert!(parse_id("not-an-id").is_none());
    assert!(parse_id("").is_none());
    // Right characters, wrong length.
    assert!(parse_id("65f2a4b8c9d1e2f3").is_none());
}

#[test]
fn test_empty_query_value_is_treated_as_absent() {
    // `GET /freelancers?skill=` deserializes to Some(""); filtering on the
    // empty string would exclude freelancers with no skills listed, so the
    // listing must stay unfiltered instead.
    let query = Query::<FreelancerQuery>::from_query("skill=").unwrap();
    assert_eq!(query.skill.as_deref(), Some(""));
    assert_eq!(non_empty(&query.skill), None);
}

#[test]
fn test_present_and_absent_query_values_pass_through() {
    let query = Query::<FreelancerQuery>::from_query("skill=ux").unwrap();
    assert_eq!(non_empty(&query.skill), Some("ux"));

    let query = Query::<FreelancerQuery>::from_query("").unwrap();
    assert_eq!(non_empty(&query.skill), None);
}

#[test]
fn test_filter_equality_clause() {
    let filter = Filter::new().eq("ad_type", "business").into_document();
    assert_eq!(filter, doc! { "ad_type": "business" });
}

#[test]
fn test_filter_substring_clause_is_case_insensitive() {
    let filter = Filter::new().contains_ci("skills", "ux").into_document();
    assert_eq!(
        filter,
        doc! { "skills": { "$regex": "ux", "$options": "i" } }
    );
}

#[test]
fn test_filter_substring_clause_escapes_metacharacters() {
    // A user searching for "c++" must not inject a regex.
    let filter = Filter::new().contains_ci("skills", "c++").into_document();
    assert_eq!(
        filter,
        doc! { "skills": { "$regex": r"c\+\+", "$options": "i" } }
    );
}

#[test]
fn test_empty_filter_matches_everything() {
    assert_eq!(Filter::new().into_document(), doc! {});
}

#[test]
fn test_filter_clauses_combine() {
    let filter = Filter::new()
        .eq("freelancer_id", "65f2a4b8c9d1e2f3a4b5c6d7")
        .eq("business_email", "ops@acme.example")
        .into_document();
    assert_eq!(
        filter,
        doc! {
            "freelancer_id": "65f2a4b8c9d1e2f3a4b5c6d7",
            "business_email": "ops@acme.example",
        }
    );
}
