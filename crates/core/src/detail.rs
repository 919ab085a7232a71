//! App detail parsing (`/api/detail/{guid}`)

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::{App, AppSummary, Developer};
use crate::utils::{
    lenient_string, non_empty, normalize_phone, parse_flag, parse_integer, parse_local_price,
    parse_price, parse_vendor_datetime,
};

/// Host that relative icon paths are served from.
pub const DEFAULT_IMAGE_BASE_URL: &str = "http://img.samsungapps.com";

/// App detail response
#[derive(Debug, Deserialize, Clone)]
pub struct DetailResponse {
    #[serde(rename = "contentId", default, deserialize_with = "lenient_string")]
    pub content_id: Option<String>,
    #[serde(rename = "appId", default, deserialize_with = "lenient_string")]
    pub app_id: Option<String>,
    #[serde(rename = "appType", default, deserialize_with = "lenient_string")]
    pub app_type: Option<String>,
    #[serde(rename = "DetailMain")]
    pub detail_main: DetailMain,
    #[serde(rename = "SellerInfo", default)]
    pub seller_info: SellerInfo,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct DetailMain {
    #[serde(default, deserialize_with = "lenient_string")]
    pub content_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cnvrn_img_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub local_price: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub discount_price: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub discount_flag: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub rating_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub rating_participants: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content_binary_version: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub limit_age_cd: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub seller_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub item_purchase_flag: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content_description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content_new_description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub customer_support_email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub deeplink_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub modify_date: Option<String>,
    #[serde(default)]
    pub permission_list: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub seller_private_policy: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub youtube_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SellerInfo {
    #[serde(default, deserialize_with = "lenient_string")]
    pub seller_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub seller_site_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub seller_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub seller_address: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub representation: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_name: Option<String>,
}

/// Parses an app detail payload.
///
/// `image_base_url` is prefixed to the relative icon path.
pub fn parse_app_details(json: &str, image_base_url: &str) -> Result<App> {
    let response: DetailResponse = serde_json::from_str(json)?;
    transform_app_details(response, image_base_url)
}

/// Maps a deserialized detail response to an [`App`].
pub fn transform_app_details(response: DetailResponse, image_base_url: &str) -> Result<App> {
    let detail = response.detail_main;

    let icon_url = non_empty(detail.cnvrn_img_url).map(|path| format!("{image_base_url}{path}"));

    let (currency_symbol, price) = match non_empty(detail.local_price) {
        Some(local_price) => {
            let (symbol, price) = parse_local_price(&local_price)?;
            (symbol, Some(price))
        }
        None => (None, None),
    };

    let rating = detail.rating_number.unwrap_or_default();
    let average_rating = rating.trim().parse::<f64>().map_err(|_| Error::InvalidNumber {
        field: "ratingNumber",
        value: rating.clone(),
    })?;

    let review_count = match non_empty(detail.rating_participants) {
        Some(count) => Some(parse_integer("ratingParticipants", &count)?),
        None => None,
    };

    let developer = transform_seller(response.seller_info, detail.seller_name);

    let summary = AppSummary {
        category_id: None,
        category_name: None,
        category_class: None,
        id: response.content_id.unwrap_or_default(),
        name: detail.content_name.unwrap_or_default(),
        icon_url,
        currency_symbol,
        price,
        discount_price: parse_price(
            "discountPrice",
            detail.discount_price.as_deref().unwrap_or_default(),
        )?,
        is_discount: parse_flag(detail.discount_flag.as_deref().unwrap_or_default()),
        average_rating,
        release_date: None,
        content_type: non_empty(response.app_type),
        guid: response.app_id.unwrap_or_default(),
        version: non_empty(detail.content_binary_version),
        version_code: None,
        size: None,
        install_size: None,
        restricted_age: non_empty(detail.limit_age_cd),
        iap_support: parse_flag(detail.item_purchase_flag.as_deref().unwrap_or_default()),
        developer,
    };

    Ok(App {
        summary,
        description: non_empty(detail.content_description),
        release_notes: non_empty(detail.content_new_description),
        customer_support_email: non_empty(detail.customer_support_email),
        deeplink: non_empty(detail.deeplink_url),
        update_date: parse_vendor_datetime(
            "modifyDate",
            detail.modify_date.as_deref().unwrap_or_default(),
        )?,
        permissions: detail.permission_list.unwrap_or_default(),
        privacy_policy_url: non_empty(detail.seller_private_policy),
        youtube_url: non_empty(detail.youtube_url),
        review_count,
    })
}

fn transform_seller(seller: SellerInfo, fallback_name: Option<String>) -> Developer {
    Developer {
        name: non_empty(seller.seller_name)
            .or(fallback_name)
            .unwrap_or_default(),
        url: non_empty(seller.seller_site_url),
        phone: non_empty(seller.seller_number.map(|phone| normalize_phone(&phone))),
        address: non_empty(seller.seller_address),
        representative: non_empty(seller.representation),
        contact_first_name: non_empty(seller.first_name),
        contact_last_name: non_empty(seller.last_name),
    }
}
