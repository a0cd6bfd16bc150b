use std::sync::Arc;

pub mod core;
pub mod error_handler;
pub mod routes;

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tokio::signal;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

pub use crate::core::{
    app_config::ApiConfig,
    app_state::{AppState, HealthCheck},
};
use crate::{
    error_handler::{AppError, AppResult},
    routes::{
        ask::ask_question_route::ask_question, health_route::health,
        not_found_route::not_found, root_route::read_root,
    },
};

/// Builds the router with all routes, CORS and request tracing.
///
/// `/ask` and `/ask/` share one handler.
pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/ask", post(ask_question))
        .route("/ask/", post(ask_question))
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(state)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Any origin and any request header, GET/POST only, credentials allowed.
///
/// Origins and headers are mirrored from the request: browsers reject `*`
/// together with credentials.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_methods([Method::GET, Method::POST])
        .allow_credentials(true)
}

/// Binds the listener and serves until Ctrl+C.
pub async fn start(config: ApiConfig, state: Arc<AppState>) -> AppResult<()> {
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .map_err(|source| AppError::Bind {
            addr: config.bind_address.to_string(),
            source,
        })?;

    info!(address = %config.bind_address, "answer service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("answer service stopped");
    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        // Without a signal handler, keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
