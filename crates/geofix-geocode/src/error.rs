use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid geocoder endpoint: {0}")]
    Endpoint(String),
}

pub type Result<T> = std::result::Result<T, Error>;
