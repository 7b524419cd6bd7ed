/// Chat-completion provider abstraction
///
/// The upstream model call is the only external dependency of a request, so
/// it sits behind a trait: the Groq adapter implements it in production and
/// tests substitute a canned stub.
use serde::Serialize;

use crate::error::AppResult;

pub mod groq;

pub use groq::GroqProvider;

/// A role-tagged message in the upstream chat payload
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system",
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user",
            content: content.into(),
        }
    }
}

/// Trait for chat-completion providers
///
/// Implementations send the ordered message list upstream and return the raw
/// completion text. They never parse or repair it; that belongs to the
/// validator.
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Requests a completion for the given messages, returning the raw text
    async fn complete(&self, messages: &[ChatMessage]) -> AppResult<String>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
