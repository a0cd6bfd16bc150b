use axum::Json;
use serde::Serialize;

/// Greeting returned by `GET /`.
pub const WELCOME_MESSAGE: &str = "Welcome to LangChain API with Groq";

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// Handler: GET /
pub async fn read_root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}
