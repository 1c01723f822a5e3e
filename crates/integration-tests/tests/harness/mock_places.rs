//! Mock places backend for integration tests
//!
//! Serves the nearby search endpoint with a fixed body and records the
//! query string of each request.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

/// Mock places backend
pub struct MockPlaces {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockPlacesState>,
}

struct MockPlacesState {
    status: StatusCode,
    body: Value,
    queries: Mutex<Vec<HashMap<String, String>>>,
}

impl MockPlaces {
    /// Answer with the given `(name, vicinity)` results and status `OK`
    pub async fn with_results(results: &[(&str, &str)]) -> anyhow::Result<Self> {
        let results: Vec<Value> = results
            .iter()
            .map(|(name, vicinity)| json!({"name": name, "vicinity": vicinity, "place_id": "mock"}))
            .collect();
        let status = if results.is_empty() { "ZERO_RESULTS" } else { "OK" };
        Self::start(StatusCode::OK, json!({"results": results, "status": status})).await
    }

    /// Answer with a single result lacking `name` and `vicinity`, status `OK`
    pub async fn with_bare_result() -> anyhow::Result<Self> {
        Self::start(
            StatusCode::OK,
            json!({"results": [{"place_id": "mock"}], "status": "OK"}),
        )
        .await
    }

    /// Answer 200 with a failed search status
    pub async fn with_search_status(status: &str) -> anyhow::Result<Self> {
        Self::start(
            StatusCode::OK,
            json!({"results": [], "status": status, "error_message": "mock failure"}),
        )
        .await
    }

    /// Answer with a non-success HTTP status
    pub async fn with_http_status(status: StatusCode) -> anyhow::Result<Self> {
        Self::start(status, json!({"error": "mock"})).await
    }

    async fn start(status: StatusCode, body: Value) -> anyhow::Result<Self> {
        let state = Arc::new(MockPlacesState {
            status,
            body,
            queries: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/maps/api/place/nearbysearch/json", routing::get(handle_nearby))
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

    pub fn base_url(&self) -> String {
        format!("http://{}/maps/api", self.addr)
    }

    /// Query parameters of each request received so far
    pub fn queries(&self) -> Vec<HashMap<String, String>> {
        self.state.queries.lock().unwrap().clone()
    }
}

impl Drop for MockPlaces {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_nearby(
    State(state): State<Arc<MockPlacesState>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    state.queries.lock().unwrap().push(query);
    (state.status, Json(state.body.clone())).into_response()
}
