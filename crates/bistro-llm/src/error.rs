use http::StatusCode;
use bistro_core::HttpError;
use thiserror::Error;

/// Errors that can occur while talking to the language model
#[derive(Debug, Error)]
pub enum LlmError {
    /// No API key is configured for the provider
    #[error("no API key configured for provider {provider}")]
    MissingApiKey { provider: String },

    /// Request could not be delivered or the connection failed
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Provider answered with a non-success status
    #[error("provider returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Provider answered with a body that does not match the wire format
    #[error("invalid upstream response: {0}")]
    InvalidResponse(String),

    /// Unexpected internal error
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl HttpError for LlmError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingApiKey { .. } | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream(_) | Self::Status { .. } | Self::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::MissingApiKey { .. } => "configuration_error",
            Self::Upstream(_) | Self::Status { .. } | Self::InvalidResponse(_) => "upstream_error",
            Self::Internal(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::MissingApiKey { .. } => "language model is not configured".to_owned(),
            Self::Internal(_) => "an internal error occurred".to_owned(),
            Self::Status { status, .. } => format!("language model provider returned {status}"),
            other => other.to_string(),
        }
    }
}
