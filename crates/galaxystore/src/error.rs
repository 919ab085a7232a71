#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] galaxystore_core::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid value for header `{name}`: {value:?}")]
    InvalidHeader { name: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
