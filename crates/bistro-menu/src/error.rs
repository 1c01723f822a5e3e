use axum::{
    Json,
    response::{IntoResponse, Response},
};
use bistro_core::{ErrorBody, HttpError};
use bistro_llm::LlmError;
use http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MenuError>;

/// Menu scanning errors
///
/// Only the upload variants reach the client. Extraction failures are
/// logged and replaced by the fallback menu.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Request is not `multipart/form-data`
    #[error("expected a multipart/form-data upload")]
    UnsupportedMediaType,

    /// Form has no `file` field
    #[error("missing required 'file' field in multipart form")]
    MissingFile,

    /// Upload exceeds the configured body limit
    #[error("upload exceeds the size limit")]
    PayloadTooLarge,

    /// Form could not be read
    #[error("invalid upload: {0}")]
    InvalidUpload(String),

    /// Language model call failed
    #[error(transparent)]
    Llm(#[from] LlmError),

    /// Model replied without any text
    #[error("model returned no content")]
    EmptyContent,

    /// Model text is not a menu document
    #[error("model output is not a menu: {0}")]
    Malformed(String),
}

impl HttpError for MenuError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::MissingFile | Self::InvalidUpload(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Llm(e) => e.status_code(),
            Self::EmptyContent | Self::Malformed(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::UnsupportedMediaType | Self::MissingFile | Self::PayloadTooLarge | Self::InvalidUpload(_) => {
                "invalid_request_error"
            }
            Self::Llm(e) => e.error_type(),
            Self::EmptyContent | Self::Malformed(_) => "upstream_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Llm(e) => e.client_message(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for MenuError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorBody::from_error(&self))).into_response()
    }
}
