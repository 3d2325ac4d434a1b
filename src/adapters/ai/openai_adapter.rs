//! OpenAI-compatible adapter for review summaries.
//!
//! Works against any chat-completions endpoint (Groq, OpenAI, local Ollama).
//! Implements `AiPort` with a single user message per request.

use crate::domain::DomainError;
use crate::ports::AiPort;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// OpenAI-compatible AI adapter.
pub struct OpenAiAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiAdapter {
    /// Create a new adapter.
    ///
    /// # Arguments
    /// * `api_url` - Full chat completions endpoint
    /// * `api_key` - Bearer credential
    /// * `model` - Model name (e.g., "llama3-70b-8192")
    /// * `timeout` - Whole-request timeout
    pub fn new(
        api_url: String,
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("HTTP client: {}", e)))?;
        Ok(Self {
            client,
            api_url,
            api_key,
            model,
        })
    }

    fn request_body(&self, prompt: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        }
    }

    /// Pull the completion text out of a decoded response.
    fn extract_content(response: ChatResponse) -> Result<String, DomainError> {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| DomainError::Service("No completion content returned".to_string()))
    }

    /// Human-readable reason for a non-success status.
    fn status_reason(status: reqwest::StatusCode) -> &'static str {
        match status.as_u16() {
            401 | 403 => "authentication failed",
            429 => "rate limit or quota exceeded",
            s if s >= 500 => "service unavailable",
            _ => "request rejected",
        }
    }
}

/// OpenAI API request structure.
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// OpenAI API response structure.
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: Option<String>,
}

#[async_trait::async_trait]
impl AiPort for OpenAiAdapter {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        info!(
            model = %self.model,
            prompt_len = prompt.len(),
            "sending prompt to AI"
        );

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainError::Service(format!("request timed out: {}", e))
                } else {
                    DomainError::Service(format!("HTTP request failed: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "AI API returned error");
            return Err(DomainError::Service(format!(
                "API error {} ({}): {}",
                status,
                Self::status_reason(status),
                text.chars().take(200).collect::<String>()
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Service(format!("Failed to parse API response: {}", e)))?;

        let content = Self::extract_content(chat_response)?;
        debug!(content_len = content.len(), "received AI response");

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter() -> OpenAiAdapter {
        OpenAiAdapter::new(
            "http://localhost/v1/chat/completions".to_string(),
            "key".to_string(),
            "llama3-70b-8192".to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_request_body_single_user_message() {
        let body = serde_json::to_value(adapter().request_body("hello")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "model": "llama3-70b-8192",
                "messages": [{"role": "user", "content": "hello"}]
            })
        );
    }

    #[test]
    fn test_extract_content_first_choice() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"  Pros: ok \n"}}]}"#;
        let response: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(OpenAiAdapter::extract_content(response).unwrap(), "Pros: ok");
    }

    #[test]
    fn test_extract_content_no_choices() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            OpenAiAdapter::extract_content(response),
            Err(DomainError::Service(_))
        ));
    }

    #[test]
    fn test_extract_content_null_content() {
        let raw = r#"{"choices":[{"message":{"content":null}}]}"#;
        let response: ChatResponse = serde_json::from_str(raw).unwrap();
        assert!(OpenAiAdapter::extract_content(response).is_err());
    }

    #[test]
    fn test_status_reason() {
        use reqwest::StatusCode;
        assert_eq!(
            OpenAiAdapter::status_reason(StatusCode::UNAUTHORIZED),
            "authentication failed"
        );
        assert_eq!(
            OpenAiAdapter::status_reason(StatusCode::TOO_MANY_REQUESTS),
            "rate limit or quota exceeded"
        );
        assert_eq!(
            OpenAiAdapter::status_reason(StatusCode::BAD_GATEWAY),
            "service unavailable"
        );
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_service_error() {
        let adapter = OpenAiAdapter::new(
            "http://127.0.0.1:9/v1/chat/completions".to_string(),
            "key".to_string(),
            "m".to_string(),
            Duration::from_secs(2),
        )
        .unwrap();
        let err = adapter.complete("hi").await.unwrap_err();
        assert!(matches!(err, DomainError::Service(_)));
    }
}
