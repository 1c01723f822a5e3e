use serde::{Deserialize, Serialize};

use super::message::ToolCall;

/// Message content within a response choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceMessage {
    /// Text content
    pub content: Option<String>,
    /// Tool calls requested by the model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
}

impl ChoiceMessage {
    /// Create a simple text message from the assistant
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            tool_calls: None,
        }
    }

    /// Create a tool-calling message from the assistant
    pub const fn with_tool_calls(tool_calls: Vec<ToolCall>) -> Self {
        Self {
            content: None,
            tool_calls: Some(tool_calls),
        }
    }

    /// Tool calls, or an empty slice when the model answered in text
    pub fn tool_calls(&self) -> &[ToolCall] {
        self.tool_calls.as_deref().unwrap_or_default()
    }
}

/// Internal canonical completion response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Generated choices, one message each
    pub choices: Vec<ChoiceMessage>,
}

impl CompletionResponse {
    /// Response carrying a single message
    pub fn single(message: ChoiceMessage) -> Self {
        Self { choices: vec![message] }
    }

    /// Consume the response and return the first choice's message
    pub fn into_message(self) -> Option<ChoiceMessage> {
        self.choices.into_iter().next()
    }
}
