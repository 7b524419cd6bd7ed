pub mod prompt;
pub mod providers;
pub mod validator;

pub use providers::{ChatMessage, CompletionProvider, GroqProvider};
