use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Language model provider configuration
///
/// Points at an `OpenAI`-compatible chat completions API.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LlmConfig {
    /// API key for authentication
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Model used for menu extraction and the order agent
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds; the HTTP client default applies when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: default_model(),
            timeout_secs: None,
        }
    }
}

impl LlmConfig {
    /// Configured API key, ignoring empty values
    pub fn credential(&self) -> Option<&SecretString> {
        crate::non_empty(self.api_key.as_ref())
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn default_model() -> String {
    "gpt-4o".to_string()
}
