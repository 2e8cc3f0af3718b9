use serde::{Deserialize, Serialize};

/// Request to import restaurant menus for a location (`POST /scrape/ubereats`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportMenusRequest {
    /// ZIP code or "City, ST"
    pub location: String,

    /// Restaurants to scrape; each one is a unit of work on the server
    pub restaurants: Vec<String>,
}

impl ImportMenusRequest {
    pub fn new(location: impl Into<String>, restaurants: Vec<String>) -> Self {
        Self {
            location: location.into(),
            restaurants,
        }
    }
}
