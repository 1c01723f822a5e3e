use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Places lookup provider configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlacesConfig {
    /// Maps platform API key
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Search radius around the coordinate, in meters
    #[serde(default = "default_radius")]
    pub radius_meters: u32,
    /// Establishment type filter
    #[serde(default = "default_place_type")]
    pub place_type: String,
    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            radius_meters: default_radius(),
            place_type: default_place_type(),
            timeout_secs: None,
        }
    }
}

impl PlacesConfig {
    /// Configured API key, ignoring empty values
    pub fn credential(&self) -> Option<&SecretString> {
        crate::non_empty(self.api_key.as_ref())
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_radius() -> u32 {
    50
}

fn default_place_type() -> String {
    "restaurant".to_string()
}
