//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use bistro_config::{AcknowledgeMode, Config, CorsConfig, ServerConfig};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults and no credentials
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    ..ServerConfig::default()
                },
                ..Config::default()
            },
        }
    }

    /// Point the language model at a mock backend
    pub fn with_llm(mut self, base_url: &str) -> Self {
        self.config.llm.api_key = Some(SecretString::from("test-key"));
        self.config.llm.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Point the places lookup at a mock backend
    pub fn with_places(mut self, base_url: &str) -> Self {
        self.config.places.api_key = Some(SecretString::from("maps-key"));
        self.config.places.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = Some(config);
        self
    }

    pub fn with_acknowledge(mut self, mode: AcknowledgeMode) -> Self {
        self.config.agent.acknowledge = mode;
        self
    }

    pub fn with_history_window(mut self, window: usize) -> Self {
        self.config.agent.history_window = window;
        self
    }

    pub fn with_max_upload_bytes(mut self, bytes: usize) -> Self {
        self.config.menu.max_upload_bytes = bytes;
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
