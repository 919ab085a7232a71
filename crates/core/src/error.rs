/// Errors raised while building requests or mapping store payloads to models
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unable to get Samsung Galaxy Store {operation}: {message}")]
    Protocol {
        operation: &'static str,
        message: String,
    },

    #[error("Malformed XML payload: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("Failed to write XML envelope: {0}")]
    XmlWrite(String),

    #[error("Malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid integer for `{field}`: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Invalid price for `{field}`: {value:?}")]
    InvalidPrice { field: &'static str, value: String },

    #[error("Invalid date for `{field}`: {value:?}")]
    InvalidDate { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
