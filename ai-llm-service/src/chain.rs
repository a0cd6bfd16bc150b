//! Prompt → provider → text.

use std::{sync::Arc, time::Instant};

use tracing::{debug, info};

use crate::{
    error_handler::AiLlmError,
    prompt::{PromptTemplate, QUESTION_VAR},
    provider::ChatProvider,
};

/// Renders a [`PromptTemplate`] and forwards it to a [`ChatProvider`].
///
/// Holds no per-request state; share it behind an `Arc`.
pub struct AnswerChain {
    prompt: PromptTemplate,
    provider: Arc<dyn ChatProvider>,
}

impl AnswerChain {
    pub fn new(prompt: PromptTemplate, provider: Arc<dyn ChatProvider>) -> Self {
        Self { prompt, provider }
    }

    /// Chain with the fixed system + question prompt.
    pub fn answer_default(provider: Arc<dyn ChatProvider>) -> Self {
        Self::new(PromptTemplate::answer_default(), provider)
    }

    /// Answers one question.
    ///
    /// # Errors
    /// - [`AiLlmError::Prompt`] if the template cannot be rendered
    /// - any error the provider returns, unchanged
    pub async fn invoke(&self, question: &str) -> Result<String, AiLlmError> {
        let started = Instant::now();
        let messages = self.prompt.format_messages(&[(QUESTION_VAR, question)])?;

        debug!(
            model = %self.provider.model(),
            messages = messages.len(),
            question_len = question.len(),
            "invoking answer chain"
        );

        let answer = self.provider.complete(&messages).await?;

        info!(
            model = %self.provider.model(),
            answer_len = answer.len(),
            latency_ms = started.elapsed().as_millis(),
            "answer chain completed"
        );

        Ok(answer)
    }

    pub fn model(&self) -> &str {
        self.provider.model()
    }
}
