//! Request envelope templates and builders

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::{CATEGORY_APPS, CATEGORY_LIST};
use crate::error::{Error, Result};

/// Static device and locale attributes of the `SamsungProtocol` element
#[derive(Debug, Clone, Copy)]
pub struct EnvelopeTemplate {
    pub attributes: &'static [(&'static str, &'static str)],
}

/// One named request with its default params, in wire order
#[derive(Debug, Clone, Copy)]
pub struct RequestTemplate {
    pub name: &'static str,
    pub id: &'static str,
    pub transaction_id: &'static str,
    pub params: &'static [(&'static str, &'static str)],
}

pub const CATEGORY_LIST_ENVELOPE: EnvelopeTemplate = EnvelopeTemplate {
    attributes: &[
        ("networkType", "0"),
        ("version2", "0"),
        ("lang", "EN"),
        ("openApiVersion", "28"),
        ("deviceModel", "SM-G998B"),
        (
            "storeFilter",
            "themeDeviceModel=SM-G998B_TM||OTFVersion=8000000||gearDeviceModel=SM-G998B_SM-R800||gOSVersion=4.0.0",
        ),
        ("mcc", "450"),
        ("mnc", "00"),
        ("csc", "CPW"),
        ("odcVersion", "4.5.21.6"),
        ("version", "6.5"),
        ("filter", "1"),
        ("odcType", "01"),
        ("systemId", "1604973510099"),
        ("sessionId", "10a4ee19e202011101104"),
        ("logId", "XXX"),
        ("userMode", "0"),
    ],
};

pub const CATEGORY_APPS_ENVELOPE: EnvelopeTemplate = EnvelopeTemplate {
    attributes: &[
        ("networkType", "0"),
        ("version2", "0"),
        ("lang", "EN"),
        ("openApiVersion", "28"),
        ("deviceModel", "SM-G998B"),
        (
            "storeFilter",
            "themeDeviceModel=SM-G998B_TM||OTFVersion=8000000||gearDeviceModel=SM-G998B_SM-R800||gOSVersion=4.0.0",
        ),
        ("mcc", "310"),
        ("mnc", "03"),
        ("csc", "MWD"),
        ("odcVersion", "9.9.30.9"),
        ("version", "6.5"),
        ("filter", "1"),
        ("odcType", "01"),
        ("systemId", "1604973510099"),
        ("sessionId", "10a4ee19e202011101104"),
        ("logId", "XXX"),
        ("userMode", "0"),
    ],
};

pub const CATEGORY_LIST_REQUEST: RequestTemplate = RequestTemplate {
    name: CATEGORY_LIST,
    id: "2225",
    transaction_id: "10a4ee19e011",
    params: &[
        ("needKidsCategoryYN", "Y"),
        ("imgWidth", "135"),
        ("imgHeight", "135"),
    ],
};

pub const CATEGORY_APPS_REQUEST: RequestTemplate = RequestTemplate {
    name: CATEGORY_APPS,
    id: "2030",
    transaction_id: "10a4ee19e126",
    params: &[
        ("imgWidth", "135"),
        ("startNum", "1"),
        ("imgHeight", "135"),
        ("alignOrder", "bestselling"),
        ("contentType", "All"),
        ("endNum", "500"),
        ("categoryName", ""),
        ("categoryID", ""),
        ("srcType", "01"),
        ("status", "0"),
    ],
};

/// Param that narrows the category listing to games.
const GAMES_KEYWORD: (&str, &str) = ("upLevelCategoryKeyword", "Games");

/// Which categories the category listing returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryScope {
    #[default]
    All,
    Games,
}

/// Builds the `normalCategoryList` envelope.
///
/// [`CategoryScope::Games`] adds the `upLevelCategoryKeyword` param; it is not
/// part of the template.
pub fn category_list_request(scope: CategoryScope) -> Result<String> {
    let mut params: Vec<(&str, String)> = CATEGORY_LIST_REQUEST
        .params
        .iter()
        .map(|(name, value)| (*name, value.to_string()))
        .collect();

    if scope == CategoryScope::Games {
        params.push((GAMES_KEYWORD.0, GAMES_KEYWORD.1.to_string()));
    }

    write_envelope(&CATEGORY_LIST_ENVELOPE, &CATEGORY_LIST_REQUEST, &params)
}

/// Builds the `categoryProductList2Notc` envelope for apps `start..=end` of a category.
///
/// Inputs are not validated; an unknown category id simply makes the server
/// answer with an error.
pub fn category_apps_request(category_id: &str, start: u32, end: u32) -> Result<String> {
    let start = start.to_string();
    let end = end.to_string();

    let params: Vec<(&str, String)> = CATEGORY_APPS_REQUEST
        .params
        .iter()
        .map(|(name, default)| {
            let value = match *name {
                "categoryName" | "categoryID" => category_id,
                "startNum" => start.as_str(),
                "endNum" => end.as_str(),
                _ => default,
            };
            (*name, value.to_string())
        })
        .collect();

    write_envelope(&CATEGORY_APPS_ENVELOPE, &CATEGORY_APPS_REQUEST, &params)
}

fn write_envelope(
    envelope: &EnvelopeTemplate,
    request: &RequestTemplate,
    params: &[(&str, String)],
) -> Result<String> {
    let mut writer = Writer::new(Vec::new());

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(write_error)?;

    let mut protocol_elem = BytesStart::new("SamsungProtocol");
    for attribute in envelope.attributes {
        protocol_elem.push_attribute(*attribute);
    }
    writer
        .write_event(Event::Start(protocol_elem))
        .map_err(write_error)?;

    let num_param = params.len().to_string();
    let mut request_elem = BytesStart::new("request");
    request_elem.push_attribute(("name", request.name));
    request_elem.push_attribute(("id", request.id));
    request_elem.push_attribute(("numParam", num_param.as_str()));
    request_elem.push_attribute(("transactionId", request.transaction_id));
    writer
        .write_event(Event::Start(request_elem))
        .map_err(write_error)?;

    for (name, value) in params {
        let mut param_elem = BytesStart::new("param");
        param_elem.push_attribute(("name", *name));
        writer
            .write_event(Event::Start(param_elem))
            .map_err(write_error)?;
        writer
            .write_event(Event::Text(BytesText::new(value)))
            .map_err(write_error)?;
        writer
            .write_event(Event::End(BytesEnd::new("param")))
            .map_err(write_error)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("request")))
        .map_err(write_error)?;
    writer
        .write_event(Event::End(BytesEnd::new("SamsungProtocol")))
        .map_err(write_error)?;

    String::from_utf8(writer.into_inner()).map_err(write_error)
}

fn write_error(err: impl std::fmt::Display) -> Error {
    Error::XmlWrite(err.to_string())
}
