//! Field normalization shared by every payload parser
//!
//! The store encodes the same concepts in several ways depending on the
//! endpoint: flags as `"Y"`, `"1"` or `"true"`, prices with a leading currency
//! symbol, dates in a handful of vendor formats. Everything here turns those
//! encodings into plain Rust values once, at the parsing boundary.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

const VENDOR_DATETIME_FORMATS: &[&str] =
    &["%Y-%m-%d %H:%M:%S%.f", "%Y.%m.%d %H:%M:%S", "%Y%m%d%H%M%S"];
const VENDOR_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y.%m.%d", "%Y%m%d"];

const PHONE_PREFIX: &str = "tel:";

/// Removes keys with `null` and empty string values from a map.
///
/// Falsy values that are defined (`0`, `0.0`, `false`, `[]`) are kept.
///
/// ```
/// use galaxystore_core::utils::minimize;
/// use serde_json::json;
///
/// let map = json!({"a": 0, "b": null, "c": "", "d": "A"});
/// let min = minimize(map.as_object().unwrap().clone());
/// assert_eq!(serde_json::Value::Object(min), json!({"a": 0, "d": "A"}));
/// ```
pub fn minimize(maximized: Map<String, Value>) -> Map<String, Value> {
    maximized
        .into_iter()
        .filter(|(_, value)| !is_blank(value))
        .collect()
}

/// Same as [`minimize`], also applied to every nested object value.
pub fn minimize_nested(maximized: Map<String, Value>) -> Map<String, Value> {
    minimize(maximized)
        .into_iter()
        .map(|(key, value)| match value {
            Value::Object(nested) => (key, Value::Object(minimize_nested(nested))),
            other => (key, other),
        })
        .collect()
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Formats a datetime, leaving out the time portion at exactly midnight.
pub fn format_datetime(value: &NaiveDateTime) -> String {
    if value.hour() != 0 || value.minute() != 0 || value.second() != 0 {
        value.format(DATETIME_FORMAT).to_string()
    } else {
        value.format(DATE_FORMAT).to_string()
    }
}

/// `serialize_with` helper for optional model dates.
pub fn serialize_datetime<S>(
    value: &Option<NaiveDateTime>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(dt) => serializer.serialize_str(&format_datetime(dt)),
        None => serializer.serialize_none(),
    }
}

/// Parses a vendor `Y`/`N` style flag: `"y"` and `"1"` (any case, trimmed) are true.
pub fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "y" | "1")
}

/// Review flags also accept `"true"`.
pub fn parse_review_flag(value: &str) -> bool {
    parse_flag(value) || value.trim().eq_ignore_ascii_case("true")
}

/// Parses an integer field. Missing or malformed values are an error.
pub fn parse_integer(field: &'static str, value: &str) -> Result<u64> {
    value.trim().parse::<u64>().map_err(|_| Error::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Parses an optional float field. Empty means absent, malformed is an error.
pub fn parse_price(field: &'static str, value: &str) -> Result<Option<f64>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value.parse::<f64>().map(Some).map_err(|_| Error::InvalidPrice {
        field,
        value: value.to_string(),
    })
}

/// Splits a combined currency and price string such as `"$1.99"` or `"0.99"`.
///
/// When the first character is not numeric it is taken as a one character
/// currency symbol and the rest is parsed as the price. Suffixed symbols
/// (`"1,99 €"`) and multi-character symbols (`"US$1.99"`) are not supported
/// and fail with [`Error::InvalidPrice`].
pub fn parse_local_price(value: &str) -> Result<(Option<String>, f64)> {
    let invalid = || Error::InvalidPrice {
        field: "localPrice",
        value: value.to_string(),
    };

    let mut chars = value.chars();
    let first = chars.next().ok_or_else(invalid)?;
    if first.is_numeric() {
        let price = value.trim().parse::<f64>().map_err(|_| invalid())?;
        Ok((None, price))
    } else {
        let price = chars.as_str().trim().parse::<f64>().map_err(|_| invalid())?;
        Ok((Some(first.to_string()), price))
    }
}

/// Parses one of the vendor date formats. Empty means absent.
///
/// Date-only values are placed at midnight so they serialize back without a
/// time portion.
pub fn parse_vendor_datetime(field: &'static str, value: &str) -> Result<Option<NaiveDateTime>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    for format in VENDOR_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(Some(dt));
        }
    }
    for format in VENDOR_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(date.and_hms_opt(0, 0, 0));
        }
    }

    Err(Error::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Removes the vendor `Tel:` token from a seller phone number.
pub fn normalize_phone(value: &str) -> String {
    let trimmed = value.trim();
    match trimmed.get(..PHONE_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(PHONE_PREFIX) => {
            trimmed[PHONE_PREFIX.len()..].trim().to_string()
        }
        _ => trimmed.to_string(),
    }
}

/// Treats `None` and `""` the same.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Deserializes a JSON scalar that may arrive as a string, number or boolean.
pub fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a scalar value, found {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_minimize_empty() {
        assert!(minimize(Map::new()).is_empty());
        assert!(minimize(object(json!({"key": null}))).is_empty());
        assert!(minimize(object(json!({"key": ""}))).is_empty());
    }

    #[test]
    fn test_minimize_keeps_falsy_values() {
        for value in [json!(0), json!(false), json!(0.0), json!([])] {
            let map = object(json!({ "key": value }));
            assert_eq!(minimize(map.clone()), map);
        }
    }

    #[test]
    fn test_minimize() {
        let sample = object(json!({"key 1": 0, "key 2": null, "key 3": "", "key 4": "A"}));
        let expected = object(json!({"key 1": 0, "key 4": "A"}));
        assert_eq!(minimize(sample), expected);
    }

    #[test]
    fn test_minimize_nested() {
        let sample = object(json!({"a": {"b": null, "c": 1}, "d": ""}));
        assert_eq!(minimize_nested(sample), object(json!({"a": {"c": 1}})));
    }

    #[test]
    fn test_format_datetime_midnight() {
        let dt = NaiveDate::from_ymd_opt(2022, 7, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(format_datetime(&dt), "2022-07-01");
    }

    #[test]
    fn test_format_datetime_with_time() {
        let dt = NaiveDate::from_ymd_opt(2022, 7, 1)
            .unwrap()
            .and_hms_opt(4, 7, 0)
            .unwrap();
        assert_eq!(format_datetime(&dt), "2022-07-01 04:07:00");
    }

    #[test]
    fn test_parse_flag() {
        for value in ["Y", "y", "1", " y "] {
            assert!(parse_flag(value), "{value:?} should be true");
        }
        for value in ["N", "0", "", "maybe", "true"] {
            assert!(!parse_flag(value), "{value:?} should be false");
        }
    }

    #[test]
    fn test_parse_review_flag() {
        assert!(parse_review_flag("true"));
        assert!(parse_review_flag("TRUE"));
        assert!(parse_review_flag("Y"));
        assert!(!parse_review_flag("false"));
        assert!(!parse_review_flag(""));
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("size", "1024").unwrap(), 1024);
        assert!(matches!(
            parse_integer("size", "12MB"),
            Err(Error::InvalidNumber { field: "size", .. })
        ));
        assert!(parse_integer("size", "").is_err());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("price", "1.99").unwrap(), Some(1.99));
        assert_eq!(parse_price("price", "0").unwrap(), Some(0.0));
        assert_eq!(parse_price("price", "").unwrap(), None);
        assert!(parse_price("price", "free").is_err());
    }

    #[test]
    fn test_parse_local_price_with_symbol() {
        let (symbol, price) = parse_local_price("$1.99").unwrap();
        assert_eq!(symbol.as_deref(), Some("$"));
        assert_eq!(price, 1.99);

        let (symbol, price) = parse_local_price("₩1200").unwrap();
        assert_eq!(symbol.as_deref(), Some("₩"));
        assert_eq!(price, 1200.0);
    }

    #[test]
    fn test_parse_local_price_without_symbol() {
        let (symbol, price) = parse_local_price("0.99").unwrap();
        assert_eq!(symbol, None);
        assert_eq!(price, 0.99);
    }

    // The first-character heuristic does not understand these formats.
    #[test]
    fn test_parse_local_price_known_limitations() {
        assert!(parse_local_price("1.99€").is_err());
        assert!(parse_local_price("US$1.99").is_err());
        assert!(parse_local_price("").is_err());
    }

    #[test]
    fn test_parse_vendor_datetime_formats() {
        let expected = NaiveDate::from_ymd_opt(2022, 7, 1)
            .unwrap()
            .and_hms_opt(4, 7, 0)
            .unwrap();
        for value in [
            "2022-07-01 04:07:00",
            "2022-07-01 04:07:00.0",
            "2022.07.01 04:07:00",
            "20220701040700",
        ] {
            assert_eq!(parse_vendor_datetime("date", value).unwrap(), Some(expected), "{value}");
        }

        let midnight = NaiveDate::from_ymd_opt(2022, 7, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        for value in ["2022-07-01", "2022.07.01", "20220701"] {
            assert_eq!(parse_vendor_datetime("date", value).unwrap(), Some(midnight), "{value}");
        }
    }

    #[test]
    fn test_parse_vendor_datetime_empty_and_invalid() {
        assert_eq!(parse_vendor_datetime("date", "").unwrap(), None);
        assert!(matches!(
            parse_vendor_datetime("date", "July 1st"),
            Err(Error::InvalidDate { field: "date", .. })
        ));
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("Tel: +1 555 0100"), "+1 555 0100");
        assert_eq!(normalize_phone("TEL:+82-2-0000"), "+82-2-0000");
        assert_eq!(normalize_phone("+1 555 0100"), "+1 555 0100");
    }

    #[test]
    fn test_lenient_string() {
        #[derive(Deserialize)]
        struct Sample {
            #[serde(default, deserialize_with = "lenient_string")]
            value: Option<String>,
        }

        let parse = |json: &str| serde_json::from_str::<Sample>(json).unwrap().value;
        assert_eq!(parse(r#"{"value": "12"}"#).as_deref(), Some("12"));
        assert_eq!(parse(r#"{"value": 12}"#).as_deref(), Some("12"));
        assert_eq!(parse(r#"{"value": true}"#).as_deref(), Some("true"));
        assert_eq!(parse(r#"{"value": null}"#), None);
        assert_eq!(parse(r#"{}"#), None);
    }
}
