use std::net::AddrParseError;

use ai_llm_service::error_handler::AiLlmError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error("invalid API_ADDRESS `{value}`")]
    InvalidAddress {
        value: String,
        #[source]
        source: AddrParseError,
    },

    // --- IO / network / server ---
    #[error("failed to bind listener on {addr}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / routing ---
    /// Request body could not be extracted; keeps the extractor's status.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("Not Found")]
    NotFound,

    /// Prompt rendering or the provider call failed.
    #[error("An error occurred: {0}")]
    Answer(#[source] AiLlmError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Rejected { status, .. } => *status,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Answer(_) => StatusCode::INTERNAL_SERVER_ERROR,

            // startup-only
            AppError::InvalidAddress { .. } | AppError::Bind { .. } | AppError::Server(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Error body: `{"detail": "..."}`.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        AppError::Rejected {
            status: err.status(),
            message: err.body_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use ai_llm_service::error_handler::{ProviderError, ProviderErrorKind};

    use super::*;

    #[test]
    fn answer_error_is_500_with_prefixed_detail() {
        let err = AppError::Answer(
            ProviderError::new(
                ProviderErrorKind::Upstream("rate limit exceeded".into()),
            )
            .into(),
        );

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "An error occurred: rate limit exceeded");
    }

    #[test]
    fn rejection_keeps_status() {
        let err = AppError::Rejected {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "missing field `question`".into(),
        };
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }
}
