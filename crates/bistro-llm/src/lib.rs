//! Language model client for Bistro
//!
//! A provider-agnostic request/response model, the `OpenAI` chat
//! completions wire format, and the [`Provider`] trait the menu extractor
//! and order agent are built on. Components receive an `Arc<dyn Provider>`
//! at construction so tests can substitute scripted providers.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod convert;
pub mod error;
pub mod protocol;
pub mod provider;
pub mod types;

use std::sync::Arc;

use bistro_config::LlmConfig;

pub use error::LlmError;
pub use provider::Provider;
pub use provider::openai::OpenAiProvider;
pub use types::{CompletionRequest, CompletionResponse};

/// Build the configured language model provider
///
/// A missing API key is not an error here; requests fail when sent.
pub fn build_provider(config: &LlmConfig) -> Result<Arc<dyn Provider>, LlmError> {
    Ok(Arc::new(OpenAiProvider::new("openai".to_owned(), config)?))
}
