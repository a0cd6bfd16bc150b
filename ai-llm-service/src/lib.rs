//! Shared LLM plumbing for the answer service.
//!
//! - [`config`]: immutable model configuration, loaded from the environment.
//! - [`prompt`]: role-tagged messages and `tera` prompt templates.
//! - [`provider`]: the [`provider::ChatProvider`] seam the HTTP layer depends on.
//! - [`services`]: concrete providers (Groq).
//! - [`chain`]: prompt rendering + one provider call, returned as a `Result`.
//! - [`health_service`]: resilient provider reachability check.
//! - [`telemetry`]: library-scoped `tracing` layer.

pub mod chain;
pub mod config;
pub mod error_handler;
pub mod health_service;
pub mod prompt;
pub mod provider;
pub mod services;
pub mod telemetry;
