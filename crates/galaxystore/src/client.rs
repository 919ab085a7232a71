//! Blocking store client
//!
//! One HTTP session with the static store headers, reused across calls. Every
//! operation is a plain request/response round trip; nothing is retried.

use galaxystore_core::detail::parse_app_details;
use galaxystore_core::models::{App, AppSummary, Category, Review};
use galaxystore_core::protocol::{
    category_apps_request, category_list_request, parse_categories, parse_category_apps,
    CategoryScope, CATEGORY_APPS, CATEGORY_LIST,
};
use galaxystore_core::reviews::{page_start_index, parse_review_page, ReviewPages};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, ORIGIN, USER_AGENT};

use crate::config::StoreConfig;
use crate::error::{Error, Result};

/// Proxy header naming the backend that XML requests are forwarded to.
const ROUTING_HEADER: &str = "x-galaxystore-url";

/// Default bounds of a category app listing (inclusive).
pub const DEFAULT_START: u32 = 1;
pub const DEFAULT_END: u32 = 500;

pub struct GalaxyStore {
    client: Client,
    config: StoreConfig,
}

impl GalaxyStore {
    /// Client configured from the environment.
    pub fn new() -> Result<Self> {
        Self::with_config(StoreConfig::from_env())
    }

    pub fn with_config(config: StoreConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header_value("User-Agent", &config.user_agent)?);
        headers.insert(ORIGIN, header_value("origin", config.base())?);
        headers.insert(
            HeaderName::from_static(ROUTING_HEADER),
            header_value(ROUTING_HEADER, &config.odc_url)?,
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Lists store categories, in server order.
    pub fn categories(&self, scope: CategoryScope) -> Result<impl Iterator<Item = Category>> {
        let body = category_list_request(scope)?;
        let xml = self.post_protocol(CATEGORY_LIST, body)?;
        let categories = parse_categories(&xml)?;
        Ok(categories)
    }

    /// Lists the apps `start..=end` of a category, bestselling first.
    pub fn category_apps(
        &self,
        category: &Category,
        start: u32,
        end: u32,
    ) -> Result<impl Iterator<Item = Result<AppSummary>>> {
        let body = category_apps_request(&category.id, start, end)?;
        let xml = self.post_protocol(CATEGORY_APPS, body)?;
        let apps = parse_category_apps(&xml)?;
        Ok(apps.map(|app| app.map_err(Error::from)))
    }

    /// Fetches one app's details by its GUID.
    pub fn app_details(&self, guid: &str) -> Result<App> {
        let url = detail_url(self.config.base(), guid);
        let json = self.get_text(&url)?;
        let app = parse_app_details(&json, &self.config.image_base_url)?;
        Ok(app)
    }

    /// Iterates one app's reviews, most recent first.
    ///
    /// Pages are requested lazily, one at a time. `max_reviews` of `None` or
    /// `<= 0` returns every review.
    pub fn app_reviews<'a>(
        &'a self,
        product_id: &'a str,
        max_reviews: Option<i64>,
    ) -> impl Iterator<Item = Result<Review>> + 'a {
        ReviewPages::new(
            move |page| self.review_page(product_id, page),
            max_reviews,
        )
    }

    fn review_page(&self, product_id: &str, page: usize) -> Result<Vec<Review>> {
        let url = comment_list_url(self.config.base(), product_id, page_start_index(page));
        log::debug!("fetching review page {page} for {product_id}");
        let json = self.get_text(&url)?;
        let reviews = parse_review_page(&json)?;
        log::debug!("review page {page} returned {} reviews", reviews.len());
        Ok(reviews)
    }

    fn post_protocol(&self, request_name: &str, body: String) -> Result<String> {
        let url = protocol_url(self.config.base(), request_name);
        log::debug!("POST {url}");

        let text = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/xml")
            .body(body)
            .send()?
            .error_for_status()?
            .text()?;

        Ok(text)
    }

    fn get_text(&self, url: &str) -> Result<String> {
        log::debug!("GET {url}");
        let text = self.client.get(url).send()?.error_for_status()?.text()?;
        Ok(text)
    }
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| Error::InvalidHeader {
        name,
        value: value.to_string(),
    })
}

/// XML protocol endpoint for a request name.
pub fn protocol_url(base: &str, request_name: &str) -> String {
    format!("{base}/storeserver/ods.as?id={request_name}")
}

/// App detail endpoint.
pub fn detail_url(base: &str, guid: &str) -> String {
    format!("{base}/api/detail/{guid}")
}

/// Comment list endpoint for the page starting at `start` (1-based).
pub fn comment_list_url(base: &str, product_id: &str, start: usize) -> String {
    format!("{base}/api/commentList/contentId={product_id}&startNum={start}")
}
