/// Represents the provider (backend) used for large language model (LLM) inference.
///
/// Only Groq's OpenAI-compatible chat API is wired today. Adding another
/// backend means extending this enum and the constructor checks in
/// [`crate::services`].
///
/// # Examples
///
/// ```
/// use ai_llm_service::config::llm_provider::LlmProvider;
///
/// let provider = LlmProvider::Groq;
/// assert_eq!(provider.to_string(), "Groq");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LlmProvider {
    /// Groq hosted inference (`/openai/v1/chat/completions`).
    Groq,
}

impl std::fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LlmProvider::Groq => f.write_str("Groq"),
        }
    }
}
