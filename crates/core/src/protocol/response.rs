//! XML response parsing for the category and category-app listings

use serde::Deserialize;

use super::{CATEGORY_APPS, CATEGORY_LIST};
use crate::error::{Error, Result};
use crate::models::{AppSummary, Category, Developer};
use crate::utils::{parse_flag, parse_integer, parse_price, parse_vendor_datetime};

/// `SamsungProtocol` response envelope
#[derive(Debug, Deserialize, Default)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub response: ResponseBody,
}

#[derive(Debug, Deserialize, Default)]
pub struct ResponseBody {
    #[serde(rename = "errorInfo", default)]
    pub error_info: Option<ErrorInfo>,
    #[serde(rename = "list", default)]
    pub records: Vec<Record>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ErrorInfo {
    #[serde(rename = "errorString", default)]
    pub error_string: Option<String>,
}

/// One `list` element: a bag of `value`s keyed by their `name` attribute
#[derive(Debug, Deserialize, Default)]
pub struct Record {
    #[serde(rename = "value", default)]
    pub values: Vec<RecordValue>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RecordValue {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "$text", default)]
    pub text: String,
}

impl Record {
    /// Text of the named value, empty when missing.
    pub fn text(&self, name: &str) -> &str {
        self.values
            .iter()
            .find(|value| value.name == name)
            .map(|value| value.text.as_str())
            .unwrap_or_default()
    }

    /// Text of the named value, `None` when missing or empty.
    pub fn optional(&self, name: &str) -> Option<String> {
        Some(self.text(name))
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    }

    fn to_category(&self) -> Category {
        Category {
            id: self.text("categoryID").to_string(),
            translation_id: self.text("categoryTranslateStringID").to_string(),
            name: self.text("categoryName").to_string(),
            icon_url: self.text("iconImgUrl").to_string(),
            watch_face: parse_flag(self.text("gearWatchFaceYN")),
            content_id: self.text("contentCategoryID").to_string(),
        }
    }

    fn to_app_summary(&self) -> Result<AppSummary> {
        Ok(AppSummary {
            category_id: self.optional("categoryID"),
            category_name: self.optional("categoryName"),
            category_class: self.optional("categoryClass"),
            id: self.text("productID").to_string(),
            name: self.text("productName").to_string(),
            icon_url: self.optional("productImgUrl"),
            currency_symbol: self.optional("currencyUnit"),
            price: parse_price("price", self.text("price"))?,
            discount_price: parse_price("discountPrice", self.text("discountPrice"))?,
            is_discount: parse_flag(self.text("discountFlag")),
            average_rating: parse_rating(self.text("averageRating"))? / 2.0,
            release_date: parse_vendor_datetime("date", self.text("date"))?,
            content_type: self.optional("contentType"),
            guid: self.text("GUID").to_string(),
            version: self.optional("version"),
            version_code: self.optional("versionCode"),
            size: Some(parse_integer("realContentSize", self.text("realContentSize"))?),
            install_size: Some(parse_integer("installSize", self.text("installSize"))?),
            restricted_age: self.optional("restrictedAge"),
            iap_support: parse_flag(self.text("IAPSupportYn")),
            developer: Developer::named(self.text("sellerName")),
        })
    }
}

fn parse_rating(value: &str) -> Result<f64> {
    value.trim().parse::<f64>().map_err(|_| Error::InvalidNumber {
        field: "averageRating",
        value: value.to_string(),
    })
}

/// Parses a response envelope, failing on a server-side error string.
pub fn parse_envelope(xml: &str, operation: &'static str) -> Result<ResponseEnvelope> {
    let envelope: ResponseEnvelope = quick_xml::de::from_str(xml.trim())?;

    if let Some(message) = envelope
        .response
        .error_info
        .as_ref()
        .and_then(|info| info.error_string.as_deref())
        .map(str::trim)
        .filter(|message| !message.is_empty())
    {
        return Err(Error::Protocol {
            operation,
            message: message.to_string(),
        });
    }

    Ok(envelope)
}

/// Parses a `normalCategoryList` response into categories, in document order.
pub fn parse_categories(xml: &str) -> Result<impl Iterator<Item = Category>> {
    let envelope = parse_envelope(xml, CATEGORY_LIST)?;
    Ok(envelope
        .response
        .records
        .into_iter()
        .map(|record| record.to_category()))
}

/// Parses a `categoryProductList2Notc` response into app summaries, in document order.
///
/// Conversion errors (a malformed size, for instance) surface when the
/// offending record is reached.
pub fn parse_category_apps(xml: &str) -> Result<impl Iterator<Item = Result<AppSummary>>> {
    let envelope = parse_envelope(xml, CATEGORY_APPS)?;
    Ok(envelope
        .response
        .records
        .into_iter()
        .map(|record| record.to_app_summary()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const CATEGORIES_XML: &str = r#"
<?xml version="1.0" encoding="UTF-8"?>
<SamsungProtocol version="6.5">
  <response name="normalCategoryList" id="2225" returnCode="0" totalCount="2">
    <list>
      <value name="categoryID">G000060521</value>
      <value name="categoryTranslateStringID">IDS_SAPPS_BODY_ACTION</value>
      <value name="categoryName">Action</value>
      <value name="iconImgUrl">http://img.samsungapps.com/action.png</value>
      <value name="gearWatchFaceYN">N</value>
      <value name="contentCategoryID">0000005309</value>
    </list>
    <list>
      <value name="categoryID">G000060522</value>
      <value name="categoryName">Watch faces</value>
      <value name="gearWatchFaceYN">Y</value>
      <value name="contentCategoryID"></value>
    </list>
  </response>
</SamsungProtocol>
"#;

    fn app_record(size: &str) -> String {
        format!(
            r#"<list>
      <value name="categoryID">G000060521</value>
      <value name="categoryName">Action</value>
      <value name="categoryClass">G</value>
      <value name="productID">000005467316</value>
      <value name="productName">Test Game</value>
      <value name="productImgUrl">http://img.samsungapps.com/icon.png</value>
      <value name="currencyUnit">$</value>
      <value name="price">1.99</value>
      <value name="discountPrice">0.99</value>
      <value name="discountFlag">Y</value>
      <value name="averageRating">8.0</value>
      <value name="date">2022.07.01</value>
      <value name="contentType">game</value>
      <value name="GUID">com.example.game</value>
      <value name="version">1.2.3</value>
      <value name="versionCode">123</value>
      <value name="realContentSize">{size}</value>
      <value name="installSize">2048</value>
      <value name="restrictedAge">12</value>
      <value name="sellerName">Example Inc.</value>
      <value name="IAPSupportYn">1</value>
    </list>"#
        )
    }

    fn apps_xml(records: &[String]) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<SamsungProtocol version="6.5"><response name="categoryProductList2Notc" id="2030">{}</response></SamsungProtocol>"#,
            records.join("\n")
        )
    }

    #[test]
    fn test_parse_categories() {
        let categories: Vec<Category> = parse_categories(CATEGORIES_XML).unwrap().collect();

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].id, "G000060521");
        assert_eq!(categories[0].translation_id, "IDS_SAPPS_BODY_ACTION");
        assert_eq!(categories[0].name, "Action");
        assert!(!categories[0].watch_face);
        assert_eq!(categories[0].content_id, "0000005309");

        assert_eq!(categories[1].id, "G000060522");
        assert!(categories[1].watch_face);
        assert_eq!(categories[1].translation_id, "");
        assert_eq!(categories[1].content_id, "");
    }

    #[test]
    fn test_parse_categories_error_string() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<SamsungProtocol><response><errorInfo><errorCode>9999</errorCode><errorString>invalid request</errorString></errorInfo><list><value name="categoryID">X</value></list></response></SamsungProtocol>"#;

        let err = parse_categories(xml).err().unwrap();
        match err {
            Error::Protocol { operation, message } => {
                assert_eq!(operation, CATEGORY_LIST);
                assert_eq!(message, "invalid request");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_category_apps() {
        let xml = apps_xml(&[app_record("1024")]);
        let apps: Vec<AppSummary> = parse_category_apps(&xml)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(apps.len(), 1);
        let app = &apps[0];
        assert_eq!(app.id, "000005467316");
        assert_eq!(app.guid, "com.example.game");
        assert_eq!(app.category_class.as_deref(), Some("G"));
        assert_eq!(app.currency_symbol.as_deref(), Some("$"));
        assert_eq!(app.price, Some(1.99));
        assert_eq!(app.discount_price, Some(0.99));
        assert!(app.is_discount);
        assert_eq!(app.average_rating, 4.0);
        assert_eq!(
            app.release_date,
            NaiveDate::from_ymd_opt(2022, 7, 1).unwrap().and_hms_opt(0, 0, 0)
        );
        assert_eq!(app.size, Some(1024));
        assert_eq!(app.install_size, Some(2048));
        assert_eq!(app.restricted_age.as_deref(), Some("12"));
        assert!(app.iap_support);
        assert_eq!(app.developer, Developer::named("Example Inc."));
    }

    #[test]
    fn test_parse_category_apps_invalid_size_fails_on_that_item() {
        let xml = apps_xml(&[app_record("1024"), app_record("12MB")]);
        let mut apps = parse_category_apps(&xml).unwrap();

        assert!(apps.next().unwrap().is_ok());
        assert!(matches!(
            apps.next().unwrap(),
            Err(Error::InvalidNumber {
                field: "realContentSize",
                ..
            })
        ));
        assert!(apps.next().is_none());
    }

    #[test]
    fn test_parse_category_apps_error_string() {
        let xml = r#"<SamsungProtocol><response><errorInfo><errorString>no such category</errorString></errorInfo></response></SamsungProtocol>"#;
        let result = parse_category_apps(xml);
        assert!(matches!(
            result.err(),
            Some(Error::Protocol {
                operation: CATEGORY_APPS,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_error_string_is_not_an_error() {
        let xml = r#"<SamsungProtocol><response><errorInfo><errorString></errorString></errorInfo></response></SamsungProtocol>"#;
        assert_eq!(parse_categories(xml).unwrap().count(), 0);
    }

    #[test]
    fn test_malformed_xml() {
        assert!(matches!(
            parse_categories("<SamsungProtocol><response>").err(),
            Some(Error::Xml(_))
        ));
    }
}
