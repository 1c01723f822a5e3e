//! Menu extractor
//!
//! Accepts a photographed menu as a multipart upload and asks a vision
//! model to transcribe it into categories. Extraction never fails from the
//! client's point of view: a fixed fallback menu stands in for any
//! upstream or parsing problem.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc, clippy::module_name_repetitions)]

mod error;
mod extractor;
mod request;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::DefaultBodyLimit, extract::State, routing::post};
use bistro_llm::Provider;

pub use error::{MenuError, Result};
pub use extractor::{EXTRACTION_PROMPT, MenuExtractor};
pub use request::MenuUpload;
pub use types::{MenuDocument, MenuImage};

/// Build the menu extractor on a shared language model provider
pub fn build_extractor(config: &bistro_config::Config, provider: Arc<dyn Provider>) -> Arc<MenuExtractor> {
    Arc::new(MenuExtractor::new(provider, &config.llm, &config.menu))
}

/// Create the endpoint router for menu scanning
pub fn endpoint_router(max_upload_bytes: usize) -> Router<Arc<MenuExtractor>> {
    Router::new()
        .route("/scan-menu", post(scan))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}

/// Handle menu scan uploads
async fn scan(State(extractor): State<Arc<MenuExtractor>>, MenuUpload(image): MenuUpload) -> Json<MenuDocument> {
    Json(extractor.scan(&image).await)
}
