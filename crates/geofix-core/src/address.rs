use serde::Deserialize;

/// Address components from a reverse-geocoding response.
///
/// Nominatim returns whichever subfields apply to the location; the rest
/// are simply absent from the JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Address {
    pub village: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postcode: Option<String>,
}

impl Address {
    /// Join the nonempty components with ", ", in village, city, state,
    /// country, postcode order.
    pub fn display_string(&self) -> String {
        [
            &self.village,
            &self.city,
            &self.state,
            &self.country,
            &self.postcode,
        ]
        .into_iter()
        .filter_map(|component| component.as_deref())
        .filter(|component| !component.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}
