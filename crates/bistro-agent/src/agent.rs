use std::sync::Arc;

use bistro_config::{AcknowledgeMode, AgentConfig, LlmConfig, PersonaConfig};
use bistro_llm::{
    CompletionRequest, Provider,
    types::{ChoiceMessage, Message, ToolCall},
};
use bistro_telemetry::{
    KeyValue,
    metrics::{self, Counter},
};

use crate::{
    error::{AgentError, Result},
    order::{OrderList, ToolInvocation},
    prompt::{self, PromptContext, UPDATE_ORDER},
    types::{ChatReply, ChatRequest},
};

/// Persona-driven ordering conversation over a language model
///
/// A turn is one model call, or two when the model calls the order tool:
/// the tool calls are applied to a copy of the client's order, then a
/// second call without tools produces the spoken confirmation.
pub struct OrderAgent {
    provider: Arc<dyn Provider>,
    model: String,
    history_window: usize,
    acknowledge: AcknowledgeMode,
    acknowledgement: String,
    max_sentences: u32,
    persona: PersonaConfig,
    mutations: Counter<u64>,
}

impl OrderAgent {
    pub fn new(provider: Arc<dyn Provider>, llm: &LlmConfig, agent: &AgentConfig) -> Self {
        Self {
            provider,
            model: llm.model.clone(),
            history_window: agent.history_window,
            acknowledge: agent.acknowledge,
            acknowledgement: agent.acknowledgement.clone(),
            max_sentences: agent.max_sentences,
            persona: agent.persona.clone(),
            mutations: metrics::counter(metrics::ORDER_MUTATION_COUNT),
        }
    }

    /// Run one conversational turn
    pub async fn chat(&self, request: ChatRequest) -> Result<ChatReply> {
        let ChatRequest {
            user_message,
            menu_data,
            history,
            restaurant_name,
            current_order,
        } = request;

        let system = prompt::system_prompt(&PromptContext {
            persona: &self.persona,
            max_sentences: self.max_sentences,
            restaurant_name: &restaurant_name,
            order: &current_order,
            menu: &menu_data,
        });

        let recent = &history[history.len().saturating_sub(self.history_window)..];
        tracing::debug!(
            restaurant = %restaurant_name,
            history = history.len(),
            forwarded = recent.len(),
            "chat turn"
        );

        let mut messages = Vec::with_capacity(recent.len() + 4);
        messages.push(Message::system(system));
        messages.extend(recent.iter().map(Message::from));
        messages.push(Message::user(user_message));

        let first = CompletionRequest::new(self.model.clone(), messages.clone())
            .with_tools(vec![prompt::update_order_tool()]);
        let reply = self.complete(&first).await?;

        if reply.tool_calls().is_empty() {
            return Ok(ChatReply {
                text: reply.content.unwrap_or_default(),
                updated_order: current_order,
            });
        }

        let calls = reply.tool_calls().to_vec();
        let mut order = current_order;
        for call in &calls {
            apply_call(&mut order, call, &self.mutations)?;
        }

        messages.push(Message::assistant_tool_calls(reply.content, calls.clone()));
        let acknowledged = match self.acknowledge {
            AcknowledgeMode::Each => calls.len(),
            AcknowledgeMode::First => 1,
        };
        for call in calls.iter().take(acknowledged) {
            messages.push(Message::tool_result(call.id.clone(), self.acknowledgement.clone()));
        }

        let confirmation = CompletionRequest::new(self.model.clone(), messages);
        let reply = self.complete(&confirmation).await?;

        Ok(ChatReply {
            text: reply.content.unwrap_or_default(),
            updated_order: order,
        })
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<ChoiceMessage> {
        self.provider
            .complete(request)
            .await?
            .into_message()
            .ok_or(AgentError::EmptyResponse)
    }
}

/// Apply one tool call to the working order
fn apply_call(order: &mut OrderList, call: &ToolCall, mutations: &Counter<u64>) -> Result<()> {
    if call.function.name != UPDATE_ORDER {
        tracing::warn!(tool = %call.function.name, call_id = %call.id, "ignoring call to unknown tool");
        return Ok(());
    }

    let invocation: ToolInvocation =
        serde_json::from_str(&call.function.arguments).map_err(|e| AgentError::InvalidToolArguments {
            call_id: call.id.clone(),
            message: e.to_string(),
        })?;

    let changed = order.apply(&invocation);
    tracing::debug!(
        item = %invocation.item_name,
        action = invocation.action.as_str(),
        changed,
        "order updated"
    );

    mutations.add(
        1,
        &[
            KeyValue::new("action", invocation.action.as_str()),
            KeyValue::new("changed", changed),
        ],
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{collections::VecDeque, sync::Mutex};

    use async_trait::async_trait;
    use bistro_llm::{
        CompletionResponse, LlmError,
        types::{FunctionCall, Role},
    };
    use serde_json::Map;

    use super::*;
    use crate::types::ConversationTurn;

    /// Replays queued replies and records every request it receives
    #[derive(Default)]
    struct ScriptedProvider {
        replies: Mutex<VecDeque<std::result::Result<ChoiceMessage, LlmError>>>,
        requests: Mutex<Vec<CompletionRequest>>,
    }

    impl ScriptedProvider {
        fn new(replies: Vec<std::result::Result<ChoiceMessage, LlmError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn requests(&self) -> Vec<CompletionRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Provider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn complete(&self, request: &CompletionRequest) -> std::result::Result<CompletionResponse, LlmError> {
            self.requests.lock().unwrap().push(request.clone());
            let message = self
                .replies
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected model call")?;
            Ok(CompletionResponse::single(message))
        }
    }

    fn tool_call(id: &str, name: &str, arguments: &str) -> ToolCall {
        ToolCall {
            id: id.to_owned(),
            function: FunctionCall {
                name: name.to_owned(),
                arguments: arguments.to_owned(),
            },
        }
    }

    fn order_call(id: &str, action: &str, item: &str) -> ToolCall {
        tool_call(
            id,
            UPDATE_ORDER,
            &format!(r#"{{"item_name":"{item}","action":"{action}"}}"#),
        )
    }

    fn agent(provider: Arc<ScriptedProvider>, config: &AgentConfig) -> OrderAgent {
        OrderAgent::new(provider, &LlmConfig::default(), config)
    }

    fn request(history: Vec<ConversationTurn>, order: &[&str]) -> ChatRequest {
        ChatRequest {
            user_message: "What's good here?".to_owned(),
            menu_data: Map::new(),
            history,
            restaurant_name: "Joe's Diner".to_owned(),
            current_order: OrderList::new(order.iter().map(|s| (*s).to_owned()).collect()),
        }
    }

    fn turns(count: usize) -> Vec<ConversationTurn> {
        (0..count)
            .map(|i| ConversationTurn {
                role: if i % 2 == 0 { Role::User } else { Role::Assistant },
                content: format!("turn {i}"),
            })
            .collect()
    }

    #[tokio::test]
    async fn text_reply_leaves_order_unchanged() {
        let provider = ScriptedProvider::new(vec![Ok(ChoiceMessage::text("Try the ribs."))]);

        let reply = agent(provider.clone(), &AgentConfig::default())
            .chat(request(Vec::new(), &["Fries"]))
            .await
            .unwrap();

        assert_eq!(reply.text, "Try the ribs.");
        assert_eq!(reply.updated_order.items(), ["Fries"]);

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].tools.as_ref().unwrap()[0].function.name, UPDATE_ORDER);
        assert_eq!(requests[0].messages[0].role, Role::System);
        assert_eq!(requests[0].messages.last().unwrap().content.as_text(), "What's good here?");
    }

    #[tokio::test]
    async fn only_recent_history_is_forwarded() {
        let provider = ScriptedProvider::new(vec![Ok(ChoiceMessage::text("Sure."))]);

        agent(provider.clone(), &AgentConfig::default())
            .chat(request(turns(9), &[]))
            .await
            .unwrap();

        let messages = &provider.requests()[0].messages;
        // system + 6 turns + user
        assert_eq!(messages.len(), 8);
        let forwarded: Vec<_> = messages[1..7].iter().map(|m| m.content.as_text()).collect();
        assert_eq!(forwarded, ["turn 3", "turn 4", "turn 5", "turn 6", "turn 7", "turn 8"]);
        assert!(!messages.iter().any(|m| m.content.as_text() == "turn 2"));
        assert_eq!(messages[1].role, Role::Assistant);
    }

    #[tokio::test]
    async fn short_history_is_forwarded_whole() {
        let provider = ScriptedProvider::new(vec![Ok(ChoiceMessage::text("Sure."))]);

        agent(provider.clone(), &AgentConfig::default())
            .chat(request(turns(2), &[]))
            .await
            .unwrap();

        assert_eq!(provider.requests()[0].messages.len(), 4);
    }

    #[tokio::test]
    async fn add_then_remove_applies_in_order_and_confirms() {
        let provider = ScriptedProvider::new(vec![
            Ok(ChoiceMessage::with_tool_calls(vec![
                order_call("call_1", "add", "Burger"),
                order_call("call_2", "remove", "Fries"),
            ])),
            Ok(ChoiceMessage::text("One burger, hold the fries!")),
        ]);

        let reply = agent(provider.clone(), &AgentConfig::default())
            .chat(request(Vec::new(), &["Fries"]))
            .await
            .unwrap();

        assert_eq!(reply.updated_order.items(), ["Burger"]);
        assert_eq!(reply.text, "One burger, hold the fries!");

        let requests = provider.requests();
        assert_eq!(requests.len(), 2);

        let confirmation = &requests[1];
        assert!(confirmation.tools.is_none());

        let tail = &confirmation.messages[confirmation.messages.len() - 3..];
        assert_eq!(tail[0].role, Role::Assistant);
        assert_eq!(tail[0].tool_calls.as_ref().unwrap().len(), 2);
        assert_eq!(tail[1].tool_call_id.as_deref(), Some("call_1"));
        assert_eq!(tail[2].tool_call_id.as_deref(), Some("call_2"));
        assert_eq!(tail[2].content.as_text(), "Order Updated.");
    }

    #[tokio::test]
    async fn first_mode_acknowledges_only_first_call() {
        let provider = ScriptedProvider::new(vec![
            Ok(ChoiceMessage::with_tool_calls(vec![
                order_call("call_1", "add", "Shake"),
                order_call("call_2", "add", "Pie"),
            ])),
            Ok(ChoiceMessage::text("Done.")),
        ]);
        let config = AgentConfig {
            acknowledge: AcknowledgeMode::First,
            ..AgentConfig::default()
        };

        let reply = agent(provider.clone(), &config)
            .chat(request(Vec::new(), &[]))
            .await
            .unwrap();

        assert_eq!(reply.updated_order.items(), ["Shake", "Pie"]);
        let tool_results: Vec<_> = provider.requests()[1]
            .messages
            .iter()
            .filter(|m| m.role == Role::Tool)
            .filter_map(|m| m.tool_call_id.clone())
            .collect();
        assert_eq!(tool_results, ["call_1"]);
    }

    #[tokio::test]
    async fn removing_absent_item_still_confirms() {
        let provider = ScriptedProvider::new(vec![
            Ok(ChoiceMessage::with_tool_calls(vec![order_call("call_1", "remove", "Salad")])),
            Ok(ChoiceMessage::text("You never ordered a salad, friend.")),
        ]);

        let reply = agent(provider, &AgentConfig::default())
            .chat(request(Vec::new(), &["Fries"]))
            .await
            .unwrap();

        assert_eq!(reply.updated_order.items(), ["Fries"]);
        assert_eq!(reply.text, "You never ordered a salad, friend.");
    }

    #[tokio::test]
    async fn unknown_tool_is_ignored() {
        let provider = ScriptedProvider::new(vec![
            Ok(ChoiceMessage::with_tool_calls(vec![
                tool_call("call_1", "call_waiter", "{}"),
                order_call("call_2", "add", "Coffee"),
            ])),
            Ok(ChoiceMessage::text("Coffee's coming.")),
        ]);

        let reply = agent(provider, &AgentConfig::default())
            .chat(request(Vec::new(), &[]))
            .await
            .unwrap();

        assert_eq!(reply.updated_order.items(), ["Coffee"]);
    }

    #[tokio::test]
    async fn missing_confirmation_text_becomes_empty() {
        let provider = ScriptedProvider::new(vec![
            Ok(ChoiceMessage::with_tool_calls(vec![order_call("call_1", "add", "Fries")])),
            Ok(ChoiceMessage {
                content: None,
                tool_calls: None,
            }),
        ]);

        let reply = agent(provider, &AgentConfig::default())
            .chat(request(Vec::new(), &[]))
            .await
            .unwrap();

        assert_eq!(reply.text, "");
        assert_eq!(reply.updated_order.items(), ["Fries"]);
    }

    #[tokio::test]
    async fn undecodable_arguments_fail_the_turn() {
        let provider = ScriptedProvider::new(vec![Ok(ChoiceMessage::with_tool_calls(vec![tool_call(
            "call_1",
            UPDATE_ORDER,
            r#"{"item_name": "Fries""#,
        )]))]);

        let err = agent(provider.clone(), &AgentConfig::default())
            .chat(request(Vec::new(), &[]))
            .await
            .unwrap_err();

        assert!(matches!(err, AgentError::InvalidToolArguments { ref call_id, .. } if call_id == "call_1"));
        assert_eq!(provider.requests().len(), 1);
    }

    #[tokio::test]
    async fn upstream_failure_surfaces() {
        let provider = ScriptedProvider::new(vec![Err(LlmError::Upstream("connection refused".to_owned()))]);

        let err = agent(provider, &AgentConfig::default())
            .chat(request(Vec::new(), &[]))
            .await
            .unwrap_err();

        assert!(matches!(err, AgentError::Llm(LlmError::Upstream(_))));
    }

    #[tokio::test]
    async fn confirmation_failure_surfaces() {
        let provider = ScriptedProvider::new(vec![
            Ok(ChoiceMessage::with_tool_calls(vec![order_call("call_1", "add", "Fries")])),
            Err(LlmError::Status {
                status: 503,
                message: "overloaded".to_owned(),
            }),
        ]);

        let err = agent(provider, &AgentConfig::default())
            .chat(request(Vec::new(), &[]))
            .await
            .unwrap_err();

        assert!(matches!(err, AgentError::Llm(LlmError::Status { status: 503, .. })));
    }
}
