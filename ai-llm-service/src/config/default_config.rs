//! Default LLM config loaded from environment variables.
//!
//! The answer service talks to a single Groq model. This module builds its
//! [`LlmModelConfig`] once at startup; a missing credential is a startup
//! failure, never a per-request one.
//!
//! # Environment variables
//!
//! - `GROQ_API_KEY`     = API credential (mandatory)
//! - `GROQ_MODEL`       = model identifier (default [`DEFAULT_GROQ_MODEL`])
//! - `GROQ_URL`         = base URL (default [`DEFAULT_GROQ_URL`])
//! - `LLM_TEMPERATURE`  = sampling temperature, `0.0..=2.0` (default `0.7`)
//! - `LLM_MAX_TOKENS`   = optional max tokens (u32)
//! - `LLM_TIMEOUT_SECS` = request timeout in seconds (default `60`)

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{
        AiLlmError, env_opt_f32, env_opt_u32, env_opt_u64, env_or, must_env,
        validate_http_endpoint, validate_range_f32,
    },
};

/// Model used when `GROQ_MODEL` is not set.
pub const DEFAULT_GROQ_MODEL: &str = "mixtral-8x7b-32768";

/// Groq's OpenAI-compatible base URL.
pub const DEFAULT_GROQ_URL: &str = "https://api.groq.com/openai";

/// Sampling temperature used when `LLM_TEMPERATURE` is not set.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Request timeout used when `LLM_TIMEOUT_SECS` is not set.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Constructs the Groq chat config from the environment.
///
/// # Errors
///
/// - [`crate::error_handler::ConfigError::MissingVar`] if `GROQ_API_KEY` is absent
/// - [`crate::error_handler::ConfigError::InvalidFormat`] if `GROQ_URL` is not http(s)
/// - [`crate::error_handler::ConfigError::InvalidNumber`] for unparsable numbers
/// - [`crate::error_handler::ConfigError::OutOfRange`] if the temperature is outside `0.0..=2.0`
pub fn config_groq() -> Result<LlmModelConfig, AiLlmError> {
    let api_key = must_env("GROQ_API_KEY")?;
    let model = env_or("GROQ_MODEL", DEFAULT_GROQ_MODEL);
    let endpoint = env_or("GROQ_URL", DEFAULT_GROQ_URL);
    validate_http_endpoint("GROQ_URL", &endpoint)?;

    let temperature = env_opt_f32("LLM_TEMPERATURE")?.unwrap_or(DEFAULT_TEMPERATURE);
    validate_range_f32("temperature", temperature, 0.0, 2.0)?;

    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?;
    let timeout_secs = env_opt_u64("LLM_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS);

    Ok(LlmModelConfig {
        provider: LlmProvider::Groq,
        model,
        endpoint,
        api_key: Some(api_key),
        max_tokens,
        temperature: Some(temperature),
        top_p: None,
        timeout_secs: Some(timeout_secs),
    })
}
