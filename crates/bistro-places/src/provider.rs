pub(crate) mod google;

use async_trait::async_trait;

use crate::{
    error::Result,
    types::{Coordinate, Place},
};

/// Parameters of a nearby search
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyQuery {
    /// Search center
    pub location: Coordinate,
    /// Radius in meters
    pub radius_meters: u32,
    /// Establishment type filter (e.g. "restaurant")
    pub place_type: String,
}

/// Trait for places lookup implementations
#[async_trait]
pub trait PlacesProvider: Send + Sync {
    /// Candidates near the query location, best match first
    async fn nearby(&self, query: &NearbyQuery) -> Result<Vec<Place>>;

    /// Get the provider name
    fn name(&self) -> &str;
}

pub use google::GooglePlacesProvider;
