//! Domain models produced by the store parsers
//!
//! Models are plain values: built once from a parsed response, then
//! serialized. Every model exposes the same minimal JSON projection through
//! [`MinimalJson`].

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::utils::{minimize_nested, serialize_datetime};

/// Minimal JSON projection shared by every model
///
/// `null` and `""` fields are dropped (recursively for nested models), while
/// `0`, `0.0` and `false` are kept. Dates are rendered as `YYYY-MM-DD` at
/// midnight and `YYYY-MM-DD HH:MM:SS` otherwise.
pub trait MinimalJson: Serialize {
    fn to_minimal_json(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(minimize_nested(map)),
            _ => Ok(Map::new()),
        }
    }
}

/// Store category
#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct Category {
    pub id: String,
    pub translation_id: String,
    pub name: String,
    pub icon_url: String,
    pub watch_face: bool,
    pub content_id: String,
}

impl Category {
    /// A category known only by id, enough to list its apps.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl MinimalJson for Category {}

/// App seller
#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct Developer {
    pub name: String,
    pub url: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub representative: Option<String>,
    pub contact_first_name: Option<String>,
    pub contact_last_name: Option<String>,
}

impl Developer {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl MinimalJson for Developer {}

/// User review of an app
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Review {
    pub text: String,
    pub user: String,
    #[serde(serialize_with = "serialize_datetime")]
    pub created_date: Option<NaiveDateTime>,
    #[serde(serialize_with = "serialize_datetime")]
    pub updated_date: Option<NaiveDateTime>,
    /// 0 to 5
    pub stars: f64,
    pub developer_responded: bool,
    pub user_id: String,
}

impl MinimalJson for Review {}

/// App as it appears in a category listing
#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct AppSummary {
    pub category_id: Option<String>,
    pub category_name: Option<String>,
    pub category_class: Option<String>,
    pub id: String,
    pub name: String,
    pub icon_url: Option<String>,
    pub currency_symbol: Option<String>,
    pub price: Option<f64>,
    pub discount_price: Option<f64>,
    pub is_discount: bool,
    /// 0 to 5
    pub average_rating: f64,
    #[serde(serialize_with = "serialize_datetime")]
    pub release_date: Option<NaiveDateTime>,
    pub content_type: Option<String>,
    /// Developer assigned SKU, distinct from the numeric product `id`
    pub guid: String,
    pub version: Option<String>,
    pub version_code: Option<String>,
    pub size: Option<u64>,
    pub install_size: Option<u64>,
    pub restricted_age: Option<String>,
    pub iap_support: bool,
    pub developer: Developer,
}

impl MinimalJson for AppSummary {}

/// Full app details
///
/// The summary fields are flattened, so the JSON projection has the same
/// shape as a summary plus the detail-only fields.
#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct App {
    #[serde(flatten)]
    pub summary: AppSummary,
    pub description: Option<String>,
    pub release_notes: Option<String>,
    pub customer_support_email: Option<String>,
    pub deeplink: Option<String>,
    #[serde(serialize_with = "serialize_datetime")]
    pub update_date: Option<NaiveDateTime>,
    pub permissions: Vec<String>,
    pub privacy_policy_url: Option<String>,
    pub youtube_url: Option<String>,
    pub review_count: Option<u64>,
}

impl MinimalJson for App {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn date(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2022, 7, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn create_test_summary() -> AppSummary {
        AppSummary {
            id: "000005467316".to_string(),
            name: "Test App".to_string(),
            price: Some(0.0),
            average_rating: 4.0,
            release_date: Some(date(0, 0, 0)),
            guid: "com.example.app".to_string(),
            size: Some(0),
            developer: Developer::named("Example Inc."),
            ..Default::default()
        }
    }

    #[test]
    fn test_category_minimal_json() {
        let category = Category {
            id: "G000060521".to_string(),
            name: "Action".to_string(),
            ..Default::default()
        };

        let json = Value::Object(category.to_minimal_json().unwrap());
        assert_eq!(
            json,
            json!({"id": "G000060521", "name": "Action", "watch_face": false})
        );
    }

    #[test]
    fn test_review_minimal_json_dates() {
        let review = Review {
            text: "Great".to_string(),
            user: "k***".to_string(),
            created_date: Some(date(0, 0, 0)),
            updated_date: Some(date(4, 7, 0)),
            stars: 0.0,
            developer_responded: false,
            user_id: String::new(),
        };

        let json = review.to_minimal_json().unwrap();
        assert_eq!(json["created_date"], json!("2022-07-01"));
        assert_eq!(json["updated_date"], json!("2022-07-01 04:07:00"));
        assert_eq!(json["stars"], json!(0.0));
        assert_eq!(json["developer_responded"], json!(false));
        assert!(!json.contains_key("user_id"));
    }

    #[test]
    fn test_summary_minimal_json_nested_developer() {
        let json = create_test_summary().to_minimal_json().unwrap();

        assert_eq!(json["developer"], json!({"name": "Example Inc."}));
        assert_eq!(json["price"], json!(0.0));
        assert_eq!(json["size"], json!(0));
        assert_eq!(json["release_date"], json!("2022-07-01"));
        assert!(!json.contains_key("currency_symbol"));
        assert!(!json.contains_key("category_id"));
    }

    #[test]
    fn test_app_minimal_json_is_flat() {
        let app = App {
            summary: create_test_summary(),
            description: Some("A test app".to_string()),
            release_notes: Some(String::new()),
            update_date: Some(date(13, 30, 5)),
            permissions: vec!["CAMERA".to_string()],
            ..Default::default()
        };

        let json = app.to_minimal_json().unwrap();
        assert_eq!(json["name"], json!("Test App"));
        assert_eq!(json["description"], json!("A test app"));
        assert_eq!(json["update_date"], json!("2022-07-01 13:30:05"));
        assert_eq!(json["permissions"], json!(["CAMERA"]));
        assert!(!json.contains_key("summary"));
        assert!(!json.contains_key("release_notes"));
        assert_eq!(app.summary.guid, "com.example.app");
    }
}
