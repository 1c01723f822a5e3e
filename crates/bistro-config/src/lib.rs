#![allow(clippy::must_use_candidate)]

pub mod agent;
pub mod cors;
mod env;
pub mod health;
pub mod llm;
mod loader;
pub mod menu;
pub mod places;
pub mod server;
pub mod telemetry;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

pub use agent::*;
pub use cors::*;
pub use health::*;
pub use llm::*;
pub use menu::*;
pub use places::*;
pub use server::*;
pub use telemetry::TelemetryConfig;

/// Top-level Bistro configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Language model provider
    #[serde(default)]
    pub llm: LlmConfig,
    /// Places lookup provider
    #[serde(default)]
    pub places: PlacesConfig,
    /// Menu scanning
    #[serde(default)]
    pub menu: MenuConfig,
    /// Conversational order agent
    #[serde(default)]
    pub agent: AgentConfig,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}

/// Treat an empty secret the same as a missing one
///
/// Config files commonly expand `{{ env.KEY | default("") }}`, which
/// leaves an empty string behind when the variable is unset.
fn non_empty(secret: Option<&SecretString>) -> Option<&SecretString> {
    secret.filter(|s| !s.expose_secret().trim().is_empty())
}
