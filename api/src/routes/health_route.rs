use std::sync::Arc;

use ai_llm_service::health_service::HealthStatus;
use axum::{Json, extract::State};

use crate::core::app_state::AppState;

/// Handler: GET /health
///
/// Checks the provider's model listing; never calls the completion endpoint.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    let status = match &state.health {
        Some(check) => check.service.check(&check.config).await,
        None => HealthStatus {
            provider: "none".into(),
            endpoint: String::new(),
            model: Some(state.chain.model().to_string()),
            ok: true,
            latency_ms: 0,
            message: "no provider check configured".into(),
        },
    };
    Json(status)
}
