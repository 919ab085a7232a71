//! The store's XML protocol (`/storeserver/ods.as`)
//!
//! Requests are a `SamsungProtocol` envelope wrapping one named `request` with
//! `param` children. Responses wrap a `response` element holding either an
//! `errorInfo/errorString` or repeated `list` records of named `value`s.
pub mod request;
pub mod response;

pub use request::{category_apps_request, category_list_request, CategoryScope};
pub use response::{parse_categories, parse_category_apps};

/// Request name for the category listing.
pub const CATEGORY_LIST: &str = "normalCategoryList";

/// Request name for the apps of one category.
pub const CATEGORY_APPS: &str = "categoryProductList2Notc";
