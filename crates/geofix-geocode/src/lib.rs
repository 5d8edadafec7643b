mod error;
mod nominatim;

pub use error::{Error, Result};
pub use nominatim::{DEFAULT_ENDPOINT, NominatimClient, ReverseResponse};
