//! Google Places nearby search provider

use async_trait::async_trait;
use bistro_config::PlacesConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use super::{NearbyQuery, PlacesProvider};
use crate::{
    error::{PlacesError, Result},
    types::Place,
};

/// Default Google Maps platform base URL
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Google Places nearby search provider
pub struct GooglePlacesProvider {
    name: String,
    client: Client,
    base_url: Url,
    api_key: Option<SecretString>,
}

/// Wire format for the nearby search response
#[derive(Debug, Deserialize)]
struct NearbySearchResponse {
    #[serde(default)]
    results: Vec<NearbySearchResult>,
    status: String,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NearbySearchResult {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    vicinity: Option<String>,
}

impl GooglePlacesProvider {
    /// Create from places configuration
    ///
    /// # Errors
    ///
    /// Returns `PlacesError::Config` if the HTTP client cannot be built
    pub fn new(name: String, config: &PlacesConfig) -> Result<Self> {
        let base_url = match config.base_url.clone() {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL).map_err(|e| PlacesError::Config(e.to_string()))?,
        };

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| PlacesError::Config(e.to_string()))?;

        Ok(Self {
            name,
            client,
            base_url,
            api_key: config.credential().cloned(),
        })
    }

    fn nearby_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/place/nearbysearch/json")
    }
}

#[async_trait]
impl PlacesProvider for GooglePlacesProvider {
    async fn nearby(&self, query: &NearbyQuery) -> Result<Vec<Place>> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| PlacesError::MissingApiKey(self.name.clone()))?;

        let location = format!("{},{}", query.location.lat, query.location.lng);
        let radius = query.radius_meters.to_string();

        let response = self
            .client
            .get(self.nearby_url())
            .query(&[
                ("location", location.as_str()),
                ("radius", radius.as_str()),
                ("type", query.place_type.as_str()),
                ("key", api_key.expose_secret()),
            ])
            .send()
            .await
            .map_err(|e| PlacesError::Connection(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PlacesError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body: NearbySearchResponse = response
            .json()
            .await
            .map_err(|e| PlacesError::InvalidResponse(e.without_url().to_string()))?;

        match body.status.as_str() {
            "OK" | "ZERO_RESULTS" => Ok(body
                .results
                .into_iter()
                .map(|r| Place {
                    name: r.name,
                    address: r.vicinity,
                })
                .collect()),
            _ => Err(PlacesError::Search {
                status: body.status,
                message: body.error_message.unwrap_or_default(),
            }),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
