//! Role-tagged chat messages and `tera` prompt templates.
//!
//! The answer service always sends the same two messages: a fixed system
//! instruction followed by the user's question. [`PromptTemplate::answer_default`]
//! builds that template; [`PromptTemplate::format_messages`] renders it fresh
//! for every request.

use serde::Serialize;
use tera::{Context, Tera};

use crate::error_handler::PromptError;

/// System instruction sent ahead of every question.
pub const DEFAULT_SYSTEM: &str =
    "You are a helpful AI assistant. Please provide clear and concise responses.";

/// User message template; the caller's text is bound to `question`.
pub const DEFAULT_USER_TEMPLATE: &str = "{{ question }}";

/// Variable name bound to the caller's question.
pub const QUESTION_VAR: &str = "question";

/// Chat role understood by OpenAI-compatible APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

/// A single rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Ordered list of `(role, template)` pairs in tera syntax.
///
/// Rendering never HTML-escapes, and substituted values are not re-parsed.
///
/// # Example
/// ```
/// use ai_llm_service::prompt::{ChatRole, PromptTemplate};
///
/// let tpl = PromptTemplate::answer_default();
/// let msgs = tpl.format_messages(&[("question", "What is 2+2?")]).unwrap();
/// assert_eq!(msgs.len(), 2);
/// assert_eq!(msgs[0].role, ChatRole::System);
/// assert_eq!(msgs[1].content, "What is 2+2?");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    messages: Vec<(ChatRole, String)>,
}

impl PromptTemplate {
    pub fn from_messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = (ChatRole, S)>,
        S: Into<String>,
    {
        Self {
            messages: messages
                .into_iter()
                .map(|(role, tpl)| (role, tpl.into()))
                .collect(),
        }
    }

    /// The fixed system + question template used by `/ask`.
    pub fn answer_default() -> Self {
        Self::from_messages([
            (ChatRole::System, DEFAULT_SYSTEM),
            (ChatRole::User, DEFAULT_USER_TEMPLATE),
        ])
    }

    /// Renders every message with the supplied variables.
    ///
    /// # Errors
    /// [`PromptError::Render`] on a template syntax error or a variable
    /// missing from `vars`.
    pub fn format_messages(&self, vars: &[(&str, &str)]) -> Result<Vec<ChatMessage>, PromptError> {
        let mut ctx = Context::new();
        for (name, value) in vars {
            ctx.insert(*name, value);
        }

        self.messages
            .iter()
            .map(|(role, tpl)| {
                Ok(ChatMessage {
                    role: *role,
                    content: Tera::one_off(tpl, &ctx, false)?,
                })
            })
            .collect()
    }
}
