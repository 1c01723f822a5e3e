use serde::{Deserialize, Serialize};

/// Geographic point supplied by the client
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lng: f64,
}

/// Establishment returned by a places provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    /// Display name, when the provider reported one
    pub name: Option<String>,
    /// Short address (street and locality), when the provider reported one
    pub address: Option<String>,
}

/// Response body of the identify endpoint
///
/// Fields the provider left out are serialized as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlaceSummary {
    pub name: Option<String>,
    pub address: Option<String>,
}

/// Name reported when no establishment matched
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// Name reported when the lookup itself failed
pub const UNKNOWN_LOCATION_ERROR: &str = "Unknown Location (Error)";

/// Address reported alongside either sentinel name
pub const UNKNOWN_ADDRESS: &str = "N/A";

impl PlaceSummary {
    /// Sentinel for a lookup that found nothing
    pub fn unknown() -> Self {
        Self {
            name: Some(UNKNOWN_LOCATION.to_owned()),
            address: Some(UNKNOWN_ADDRESS.to_owned()),
        }
    }

    /// Sentinel for a lookup that failed
    pub fn unknown_after_error() -> Self {
        Self {
            name: Some(UNKNOWN_LOCATION_ERROR.to_owned()),
            address: Some(UNKNOWN_ADDRESS.to_owned()),
        }
    }
}

impl From<Place> for PlaceSummary {
    fn from(place: Place) -> Self {
        Self {
            name: place.name,
            address: place.address,
        }
    }
}
