//! Location resolver
//!
//! Turns a latitude/longitude pair into the name and address of the
//! nearest restaurant.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc, clippy::module_name_repetitions)]

mod error;
mod provider;
mod resolver;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};

pub use error::{PlacesError, Result};
pub use provider::{GooglePlacesProvider, NearbyQuery, PlacesProvider};
pub use resolver::LocationResolver;
pub use types::{Coordinate, Place, PlaceSummary, UNKNOWN_ADDRESS, UNKNOWN_LOCATION, UNKNOWN_LOCATION_ERROR};

/// Build the location resolver from configuration
pub fn build_resolver(config: &bistro_config::PlacesConfig) -> anyhow::Result<Arc<LocationResolver>> {
    let resolver =
        LocationResolver::from_config(config).map_err(|e| anyhow::anyhow!("Failed to initialize places lookup: {e}"))?;
    Ok(Arc::new(resolver))
}

/// Create the endpoint router for location resolution
pub fn endpoint_router() -> Router<Arc<LocationResolver>> {
    Router::new().route("/identify-restaurant", post(identify))
}

/// Handle location resolution requests
async fn identify(State(resolver): State<Arc<LocationResolver>>, Json(location): Json<Coordinate>) -> Json<PlaceSummary> {
    Json(resolver.resolve(location).await)
}
