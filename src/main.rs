use std::{error::Error, sync::Arc};

use ai_llm_service::{
    chain::AnswerChain, config::default_config::config_groq, health_service::HealthService,
    services::groq_service::GroqService, telemetry,
};
use api::{ApiConfig, AppState};
use tracing::{Level, info};
use tracing_subscriber::{Layer, filter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env when present.
    // A missing file is fine; an unreadable or invalid one is not.
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            return Err(err.into());
        }
    }

    init_tracing();

    // Provider client is built once; a missing GROQ_API_KEY stops startup here.
    let llm_config = config_groq()?;
    let provider = Arc::new(GroqService::new(llm_config.clone())?);
    let health = HealthService::new(Some(10))?;

    info!(model = %llm_config.model, endpoint = %llm_config.endpoint, "provider configured");

    let state = AppState::new(AnswerChain::answer_default(provider)).with_health(health, llm_config);
    let api_config = ApiConfig::from_env()?;

    api::start(api_config, Arc::new(state)).await?;

    Ok(())
}

fn init_tracing() {
    let filter = telemetry::env_filter_with_level("info", Level::INFO);
    let everything_else =
        filter::filter_fn(|meta| !telemetry::is_library_target(meta.target()));

    tracing_subscriber::registry()
        .with(filter)
        .with(telemetry::layer())
        .with(fmt::layer().with_target(false).with_filter(everything_else))
        .init();
}
