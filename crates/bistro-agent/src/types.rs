use bistro_llm::types::{Message, Role};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::order::OrderList;

/// One prior turn of the conversation, as held by the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl From<&ConversationTurn> for Message {
    fn from(turn: &ConversationTurn) -> Self {
        Self::text(turn.role, turn.content.clone())
    }
}

/// Body of a chat request
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatRequest {
    pub user_message: String,
    /// Menu context, forwarded to the model verbatim
    pub menu_data: Map<String, Value>,
    pub history: Vec<ConversationTurn>,
    pub restaurant_name: String,
    pub current_order: OrderList,
}

/// Body of a chat response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChatReply {
    /// Final assistant text, empty when the model produced none
    pub text: String,
    pub updated_order: OrderList,
}
