use axum::{
    Json,
    response::{IntoResponse, Response},
};
use bistro_core::{ErrorBody, HttpError};
use bistro_llm::LlmError;
use http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AgentError>;

/// Failures of a chat turn; unlike the other endpoints these reach the client
#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    /// Model returned no choices
    #[error("model returned an empty response")]
    EmptyResponse,

    /// Tool call arguments do not decode as an order mutation
    #[error("invalid arguments for tool call {call_id}: {message}")]
    InvalidToolArguments { call_id: String, message: String },
}

impl HttpError for AgentError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Llm(e) => e.status_code(),
            Self::EmptyResponse | Self::InvalidToolArguments { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::Llm(e) => e.error_type(),
            Self::EmptyResponse | Self::InvalidToolArguments { .. } => "upstream_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Llm(e) => e.client_message(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AgentError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "chat turn failed");
        }
        (status, Json(ErrorBody::from_error(&self))).into_response()
    }
}
