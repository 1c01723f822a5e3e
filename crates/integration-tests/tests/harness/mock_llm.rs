//! Mock language model backend for integration tests
//!
//! Implements the `OpenAI` chat completions endpoint. Replies are served
//! from a script in order; once the script is exhausted every call gets
//! the default text reply. Every request body is captured for assertions.

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

/// Default reply once the script is exhausted
pub const DEFAULT_REPLY: &str = "Well now, that sounds mighty fine.";

/// One scripted completion outcome
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Assistant text
    Text(String),
    /// Assistant message with no content at all
    Empty,
    /// Tool calls as `(id, function name, JSON arguments)`
    ToolCalls(Vec<(String, String, String)>),
    /// Error status with an `OpenAI`-style error body
    Fail(u16),
}

impl MockReply {
    pub fn text(content: &str) -> Self {
        Self::Text(content.to_owned())
    }

    /// `update_order` calls as `(action, item)` pairs, ids `call_1`, `call_2`, ...
    pub fn order_calls(calls: &[(&str, &str)]) -> Self {
        Self::ToolCalls(
            calls
                .iter()
                .enumerate()
                .map(|(i, (action, item))| {
                    (
                        format!("call_{}", i + 1),
                        "update_order".to_owned(),
                        json!({"item_name": item, "action": action}).to_string(),
                    )
                })
                .collect(),
        )
    }
}

/// Mock language model backend
pub struct MockLlm {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockLlmState>,
}

struct MockLlmState {
    script: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<Value>>,
}

impl MockLlm {
    /// Start a mock that always answers with [`DEFAULT_REPLY`]
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_scripted(Vec::new()).await
    }

    /// Start a mock that answers with the given replies in order
    pub async fn start_scripted(script: Vec<MockReply>) -> anyhow::Result<Self> {
        let state = Arc::new(MockLlmState {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v1/chat/completions", routing::post(handle_chat_completions))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the language model
    ///
    /// Includes `/v1` since the provider appends `/chat/completions`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Request bodies received so far, oldest first
    pub fn requests(&self) -> Vec<Value> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn completion_count(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }
}

impl Drop for MockLlm {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_chat_completions(State(state): State<Arc<MockLlmState>>, Json(body): Json<Value>) -> Response {
    let model = body["model"].as_str().unwrap_or("mock").to_owned();
    state.requests.lock().unwrap().push(body);

    let reply = state
        .script
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| MockReply::text(DEFAULT_REPLY));

    let (message, finish_reason) = match reply {
        MockReply::Text(content) => (json!({"role": "assistant", "content": content}), "stop"),
        MockReply::Empty => (json!({"role": "assistant", "content": null}), "stop"),
        MockReply::ToolCalls(calls) => {
            let tool_calls: Vec<Value> = calls
                .into_iter()
                .map(|(id, name, arguments)| {
                    json!({"id": id, "type": "function", "function": {"name": name, "arguments": arguments}})
                })
                .collect();
            (
                json!({"role": "assistant", "content": null, "tool_calls": tool_calls}),
                "tool_calls",
            )
        }
        MockReply::Fail(status) => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            return (
                status,
                Json(json!({
                    "error": {
                        "message": "mock server intentional failure",
                        "type": "server_error"
                    }
                })),
            )
                .into_response();
        }
    };

    Json(json!({
        "id": "chatcmpl-mock",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": model,
        "choices": [{"index": 0, "message": message, "finish_reason": finish_reason}],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    }))
    .into_response()
}
