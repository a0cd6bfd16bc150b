use ai_llm_service::{
    chain::AnswerChain, config::llm_model_config::LlmModelConfig,
    health_service::HealthService,
};

/// Shared state for all HTTP handlers.
///
/// Built once by the binary and handed to the router behind an `Arc`;
/// handlers only read from it.
pub struct AppState {
    /// Prompt + provider used by `/ask`.
    pub chain: AnswerChain,
    /// Optional reachability check for `/health`.
    pub health: Option<HealthCheck>,
}

/// Health checker paired with the config it should check.
pub struct HealthCheck {
    pub service: HealthService,
    pub config: LlmModelConfig,
}

impl AppState {
    pub fn new(chain: AnswerChain) -> Self {
        Self {
            chain,
            health: None,
        }
    }

    pub fn with_health(mut self, service: HealthService, config: LlmModelConfig) -> Self {
        self.health = Some(HealthCheck { service, config });
        self
    }
}
