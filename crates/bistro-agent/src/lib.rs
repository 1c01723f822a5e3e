//! Conversational order agent
//!
//! Plays a persona at the table, forwards the recent conversation to the
//! language model with a single `update_order` tool, and applies the
//! model's tool calls to the client's order.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc, clippy::module_name_repetitions)]

mod agent;
mod error;
mod order;
mod prompt;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use bistro_llm::Provider;

pub use agent::OrderAgent;
pub use error::{AgentError, Result};
pub use order::{OrderAction, OrderList, ToolInvocation};
pub use prompt::{PromptContext, UPDATE_ORDER, system_prompt, update_order_tool};
pub use types::{ChatReply, ChatRequest, ConversationTurn};

/// Build the order agent on a shared language model provider
pub fn build_agent(config: &bistro_config::Config, provider: Arc<dyn Provider>) -> Arc<OrderAgent> {
    Arc::new(OrderAgent::new(provider, &config.llm, &config.agent))
}

/// Create the endpoint router for the chat turn
pub fn endpoint_router() -> Router<Arc<OrderAgent>> {
    Router::new().route("/chat", post(chat))
}

/// Handle chat turns
async fn chat(State(agent): State<Arc<OrderAgent>>, Json(request): Json<ChatRequest>) -> Result<Json<ChatReply>> {
    let reply = agent.chat(request).await?;
    Ok(Json(reply))
}
