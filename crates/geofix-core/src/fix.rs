use crate::{Error, Result};
use serde::Serialize;

/// A single position fix as rendered by the capture page.
///
/// The fields are kept as decimal strings exactly as the page produced
/// them. They are echoed to the user and forwarded verbatim as query
/// parameters to the geocoder; converting through a float here would only
/// lose digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoordinateFix {
    pub latitude: String,
    pub longitude: String,
    pub accuracy_meters: String,
}

impl CoordinateFix {
    /// Parse the scraped DOM text, which must be exactly
    /// "lat,lon,accuracy".
    ///
    /// Callers are expected to short-circuit on empty text before calling
    /// this; an empty string is rejected like any other wrong shape.
    pub fn parse(text: &str) -> Result<Self> {
        let mut parts = text.split(',');

        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(lat), Some(lon), Some(accuracy), None) => Ok(Self {
                latitude: lat.to_string(),
                longitude: lon.to_string(),
                accuracy_meters: accuracy.to_string(),
            }),
            _ => Err(Error::MalformedFix(text.to_string())),
        }
    }
}
