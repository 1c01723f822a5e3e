use std::sync::Arc;

use axum::{Json, extract::State};
use bistro_config::Config;
use serde::Serialize;

/// Liveness payload, fixed at startup
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: String,
    /// Persona the agent is playing
    pub president: String,
}

impl HealthStatus {
    pub fn from_config(config: &Config) -> Self {
        Self {
            status: config.server.health.status.clone(),
            president: config.agent.persona.short_name.clone(),
        }
    }
}

/// Health check handler
pub async fn health_handler(State(status): State<Arc<HealthStatus>>) -> Json<HealthStatus> {
    Json(status.as_ref().clone())
}
