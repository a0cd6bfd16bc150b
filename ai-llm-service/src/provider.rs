use async_trait::async_trait;

use crate::{error_handler::AiLlmError, prompt::ChatMessage};

/// A chat-completion backend.
///
/// The HTTP layer only sees this trait, so tests can swap the real Groq
/// client for an in-process fake. Implementations must be thread-safe: one
/// instance is shared by every request.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Sends the ordered messages and returns the assistant's plain text.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, AiLlmError>;

    /// Model identifier, for logs.
    fn model(&self) -> &str;
}
