/// Groq chat-completion provider (OpenAI-compatible wire format)
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    services::providers::{ChatMessage, CompletionProvider},
};

/// Top-level chat-completion envelope, reduced to the fields we read
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Clone)]
pub struct GroqProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
    temperature: f32,
}

impl GroqProvider {
    pub fn new(config: &Config) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_key: config.groq_api_key.clone(),
            api_url: config.groq_api_url.clone(),
            model: config.groq_model.clone(),
            temperature: config.temperature,
        })
    }

    fn extract_content(response: ChatCompletionResponse) -> AppResult<String> {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| {
                AppError::UpstreamTransport("Upstream returned no message content".to_string())
            })
    }
}

#[async_trait::async_trait]
impl CompletionProvider for GroqProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> AppResult<String> {
        let url = format!("{}/chat/completions", self.api_url);
        let body = json!({
            "model": self.model,
            "temperature": self.temperature,
            "response_format": { "type": "json_object" },
            "messages": messages,
        });

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamTransport(format!(
                "Upstream returned status {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse =
            response.json().await.map_err(map_transport_error)?;
        let content = Self::extract_content(completion)?;

        tracing::info!(
            model = %self.model,
            content_len = content.len(),
            provider = "groq",
            "Completion received"
        );

        Ok(content)
    }

    fn name(&self) -> &'static str {
        "groq"
    }
}

fn map_transport_error(e: reqwest::Error) -> AppError {
    if e.is_timeout() {
        AppError::UpstreamTimeout
    } else {
        AppError::UpstreamTransport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_content_trims_completion_text() {
        let response = ChatCompletionResponse {
            choices: vec![ChatChoice {
                message: ChatChoiceMessage {
                    content: Some("  {\"movies\": []}\n".to_string()),
                },
            }],
        };
        let content = GroqProvider::extract_content(response).unwrap();
        assert_eq!(content, "{\"movies\": []}");
    }

    #[test]
    fn test_extract_content_rejects_empty_choices() {
        let response = ChatCompletionResponse { choices: vec![] };
        let result = GroqProvider::extract_content(response);
        assert!(matches!(result, Err(AppError::UpstreamTransport(_))));
    }

    #[test]
    fn test_extract_content_rejects_missing_content() {
        let response = ChatCompletionResponse {
            choices: vec![ChatChoice {
                message: ChatChoiceMessage { content: None },
            }],
        };
        let result = GroqProvider::extract_content(response);
        assert!(matches!(result, Err(AppError::UpstreamTransport(_))));
    }

    #[test]
    fn test_envelope_deserializes_groq_payload() {
        let payload = serde_json::json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": { "role": "assistant", "content": "{\"movies\":[]}" },
                    "finish_reason": "stop"
                }
            ],
            "usage": { "prompt_tokens": 10, "completion_tokens": 5 }
        });
        let envelope: ChatCompletionResponse = serde_json::from_value(payload).unwrap();
        let content = GroqProvider::extract_content(envelope).unwrap();
        assert_eq!(content, "{\"movies\":[]}");
    }
}
