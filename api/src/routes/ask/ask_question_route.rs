//! POST /ask — answers one question through the configured provider.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::error;

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::ask::ask_request::{AskRequest, AskResponse},
};

/// Handler: POST /ask and POST /ask/
///
/// Body errors are rejected before the provider is touched. Any failure
/// while rendering the prompt or calling the provider becomes a 500 with
/// `{"detail": "An error occurred: <message>"}`.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8000/ask \
///   -H 'content-type: application/json' \
///   -d '{"question":"What is 2+2?"}'
/// ```
pub async fn ask_question(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> AppResult<Json<AskResponse>> {
    let Json(body) = payload?;

    let answer = state.chain.invoke(&body.question).await.map_err(|err| {
        error!(error = %err, model = %state.chain.model(), "failed to answer question");
        AppError::Answer(err)
    })?;

    Ok(Json(AskResponse { answer }))
}
