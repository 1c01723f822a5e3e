use std::sync::Arc;

use bistro_config::PlacesConfig;
use bistro_telemetry::{
    KeyValue,
    metrics::{self, Counter},
};

use crate::{
    provider::{GooglePlacesProvider, NearbyQuery, PlacesProvider},
    types::{Coordinate, PlaceSummary},
};

/// Maps a coordinate to the closest matching establishment
///
/// Resolution never fails: an empty result yields the unknown sentinel and
/// any provider failure yields the error sentinel.
pub struct LocationResolver {
    provider: Arc<dyn PlacesProvider>,
    radius_meters: u32,
    place_type: String,
    lookups: Counter<u64>,
}

impl LocationResolver {
    pub fn new(provider: Arc<dyn PlacesProvider>, config: &PlacesConfig) -> Self {
        Self {
            provider,
            radius_meters: config.radius_meters,
            place_type: config.place_type.clone(),
            lookups: metrics::counter(metrics::PLACES_LOOKUP_COUNT),
        }
    }

    /// Build a resolver backed by Google Places
    pub fn from_config(config: &PlacesConfig) -> crate::error::Result<Self> {
        let provider = GooglePlacesProvider::new("google".to_owned(), config)?;
        Ok(Self::new(Arc::new(provider), config))
    }

    pub async fn resolve(&self, location: Coordinate) -> PlaceSummary {
        tracing::info!(lat = location.lat, lng = location.lng, "finding restaurant");

        let query = NearbyQuery {
            location,
            radius_meters: self.radius_meters,
            place_type: self.place_type.clone(),
        };

        let (summary, outcome) = match self.provider.nearby(&query).await {
            Ok(places) => match places.into_iter().next() {
                Some(place) => (PlaceSummary::from(place), "found"),
                None => (PlaceSummary::unknown(), "not_found"),
            },
            Err(e) => {
                tracing::error!(provider = %self.provider.name(), error = %e, "places lookup failed");
                (PlaceSummary::unknown_after_error(), "error")
            }
        };

        self.lookups.add(
            1,
            &[
                KeyValue::new("provider", self.provider.name().to_owned()),
                KeyValue::new("outcome", outcome),
            ],
        );

        summary
    }
}
