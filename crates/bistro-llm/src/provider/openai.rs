//! `OpenAI`-compatible provider implementation

use std::time::Instant;

use async_trait::async_trait;
use bistro_config::LlmConfig;
use bistro_telemetry::{
    KeyValue,
    metrics::{self, Histogram},
};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use super::Provider;
use crate::error::LlmError;
use crate::protocol::openai::{OpenAiErrorResponse, OpenAiRequest, OpenAiResponse};
use crate::types::{CompletionRequest, CompletionResponse};

/// Default `OpenAI` API base URL
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// `OpenAI`-compatible provider
pub struct OpenAiProvider {
    name: String,
    client: Client,
    base_url: Url,
    api_key: Option<SecretString>,
    request_duration: Histogram<f64>,
}

impl OpenAiProvider {
    /// Create from provider configuration
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Internal` if the default base URL or the HTTP
    /// client cannot be built.
    pub fn new(name: String, config: &LlmConfig) -> Result<Self, LlmError> {
        let base_url = match config.base_url.clone() {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL).map_err(|e| LlmError::Internal(e.into()))?,
        };

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| LlmError::Internal(e.into()))?;

        Ok(Self {
            name,
            client,
            base_url,
            api_key: config.credential().cloned(),
            request_duration: metrics::duration_histogram(metrics::LLM_REQUEST_DURATION),
        })
    }

    /// Build the chat completions URL
    fn completions_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/chat/completions")
    }

    async fn send(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let api_key = self.api_key.as_ref().ok_or_else(|| LlmError::MissingApiKey {
            provider: self.name.clone(),
        })?;

        let wire_request = OpenAiRequest::from(request);

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(api_key.expose_secret())
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(provider = %self.name, error = %e, "upstream request failed");
                LlmError::Upstream(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<OpenAiErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            tracing::warn!(
                provider = %self.name,
                status = %status,
                message = %message,
                "upstream returned error"
            );
            return Err(LlmError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let wire_response: OpenAiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("failed to parse response: {e}")))?;

        Ok(wire_response.into())
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let start = Instant::now();
        let result = self.send(request).await;

        let outcome = if result.is_ok() { "success" } else { "error" };
        metrics::record_duration(
            &self.request_duration,
            start,
            &[
                KeyValue::new("provider", self.name.clone()),
                KeyValue::new("model", request.model.clone()),
                KeyValue::new("outcome", outcome),
            ],
        );

        tracing::debug!(provider = %self.name, model = %request.model, outcome, "completion finished");

        result
    }
}
