use std::net::SocketAddr;

use crate::error_handler::{AppError, AppResult};

/// Listener address used when `API_ADDRESS` is unset.
pub const DEFAULT_API_ADDRESS: &str = "0.0.0.0:8000";

/// HTTP server settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_address: SocketAddr,
}

impl ApiConfig {
    /// Load settings from `API_ADDRESS` (default [`DEFAULT_API_ADDRESS`]).
    pub fn from_env() -> AppResult<Self> {
        let raw = std::env::var("API_ADDRESS")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_ADDRESS.to_string());
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> AppResult<Self> {
        raw.trim()
            .parse::<SocketAddr>()
            .map(|bind_address| Self { bind_address })
            .map_err(|source| AppError::InvalidAddress {
                value: raw.to_string(),
                source,
            })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 8000)),
        }
    }
}
