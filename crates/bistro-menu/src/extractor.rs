use std::sync::Arc;

use base64::{Engine, prelude::BASE64_STANDARD};
use bistro_config::{LlmConfig, MenuConfig};
use bistro_llm::{
    CompletionRequest, Provider,
    types::{ContentPart, Message, ResponseFormat},
};
use bistro_telemetry::{
    KeyValue,
    metrics::{self, Counter},
};

use crate::{
    error::{MenuError, Result},
    types::{MenuDocument, MenuImage},
};

/// Instruction sent alongside every menu image
pub const EXTRACTION_PROMPT: &str = r#"Extract menu items from this image into JSON: {"drinks": [], "appetizers": [], "entrees": [], "sides": []} Include price if visible."#;

/// Turns a photographed menu into a [`MenuDocument`]
pub struct MenuExtractor {
    provider: Arc<dyn Provider>,
    model: String,
    default_image_type: String,
    scans: Counter<u64>,
}

impl MenuExtractor {
    pub fn new(provider: Arc<dyn Provider>, llm: &LlmConfig, menu: &MenuConfig) -> Self {
        Self {
            provider,
            model: llm.model.clone(),
            default_image_type: menu.default_image_type.clone(),
            scans: metrics::counter(metrics::MENU_SCAN_COUNT),
        }
    }

    /// Extract the menu, substituting the fallback menu on any failure
    pub async fn scan(&self, image: &MenuImage) -> MenuDocument {
        let (menu, outcome) = match self.extract(image).await {
            Ok(menu) => (menu, "extracted"),
            Err(e) => {
                tracing::warn!(error = %e, "menu extraction failed, using fallback menu");
                (MenuDocument::fallback(), "fallback")
            }
        };

        self.scans.add(1, &[KeyValue::new("outcome", outcome)]);

        menu
    }

    async fn extract(&self, image: &MenuImage) -> Result<MenuDocument> {
        let media_type = image.media_type(&self.default_image_type);
        tracing::debug!(
            bytes = image.bytes.len(),
            media_type,
            file_name = image.file_name.as_deref().unwrap_or(""),
            "scanning menu image"
        );

        let data_uri = format!("data:{media_type};base64,{}", BASE64_STANDARD.encode(&image.bytes));

        let request = CompletionRequest::new(
            self.model.clone(),
            vec![Message::user_parts(vec![
                ContentPart::Text {
                    text: EXTRACTION_PROMPT.to_owned(),
                },
                ContentPart::Image {
                    url: data_uri,
                    detail: None,
                },
            ])],
        )
        .with_response_format(ResponseFormat::JsonObject);

        let response = self.provider.complete(&request).await?;

        let text = response
            .into_message()
            .and_then(|message| message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(MenuError::EmptyContent)?;

        MenuDocument::parse(&text)
    }
}
