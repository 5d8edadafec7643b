use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed position fix (expected \"lat,lon,accuracy\"): {0:?}")]
    MalformedFix(String),
}

pub type Result<T> = std::result::Result<T, Error>;
