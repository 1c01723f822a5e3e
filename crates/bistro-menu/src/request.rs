use axum::{
    body::Body,
    extract::{FromRequest, Multipart},
};
use http::StatusCode;

use crate::{error::MenuError, types::MenuImage};

/// Name of the form field carrying the image
const FILE_FIELD: &str = "file";

/// Extractor for the multipart menu upload
///
/// Reads the `file` field and ignores every other field. The body limit is
/// applied by the router's `DefaultBodyLimit` layer.
pub struct MenuUpload(pub MenuImage);

impl<S> FromRequest<S> for MenuUpload
where
    S: Send + Sync,
{
    type Rejection = MenuError;

    async fn from_request(request: http::Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = request
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !content_type.starts_with("multipart/form-data") {
            return Err(MenuError::UnsupportedMediaType);
        }

        let mut multipart = Multipart::from_request(request, state)
            .await
            .map_err(|e| MenuError::InvalidUpload(e.body_text()))?;

        loop {
            let field = match multipart.next_field().await {
                Ok(Some(field)) => field,
                Ok(None) => return Err(MenuError::MissingFile),
                Err(e) => return Err(read_error(e.status(), e.body_text())),
            };

            if field.name() != Some(FILE_FIELD) {
                continue;
            }

            let content_type = field.content_type().map(str::to_owned);
            let file_name = field.file_name().map(str::to_owned);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| read_error(e.status(), e.body_text()))?;

            return Ok(Self(MenuImage {
                bytes,
                content_type,
                file_name,
            }));
        }
    }
}

fn read_error(status: StatusCode, message: String) -> MenuError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        MenuError::PayloadTooLarge
    } else {
        MenuError::InvalidUpload(message)
    }
}
