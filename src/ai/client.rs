//! LLM (`OpenAI`) API client module
//!
//! Encapsulates all LLM API interactions for generating summaries.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::info;

use super::{ChatBackend, CompletionRequest};
use crate::errors::SummaryError;

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default timeout for a single completion request. Generation for a full
/// chunk prompt can take a while, so this is deliberately generous.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// LLM API client for generating summaries
pub struct OpenAiClient {
    http: Client,
    api_key: String,
    org_id: Option<String>,
    model_name: String,
}

impl OpenAiClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(
        api_key: String,
        org_id: Option<String>,
        model_name: String,
    ) -> Result<Self, SummaryError> {
        Self::with_timeout(api_key, org_id, model_name, DEFAULT_TIMEOUT)
    }

    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn with_timeout(
        api_key: String,
        org_id: Option<String>,
        model_name: String,
        timeout: Duration,
    ) -> Result<Self, SummaryError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SummaryError::Http(format!("Failed to build OpenAI HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key,
            org_id,
            model_name,
        })
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    fn build_messages(prompt: &str) -> Vec<ChatCompletionMessage> {
        vec![ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(prompt.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        }]
    }

    fn build_request_body(&self, request: &CompletionRequest) -> Value {
        let messages: Vec<Value> = Self::build_messages(&request.prompt)
            .iter()
            .filter_map(|msg| {
                let role_str = match msg.role {
                    MessageRole::system => "system",
                    MessageRole::user | MessageRole::function | MessageRole::tool => "user",
                    MessageRole::assistant => "assistant",
                };

                match &msg.content {
                    Content::Text(text) => Some(json!({
                        "role": role_str,
                        "content": text
                    })),
                    Content::ImageUrl(_) => None,
                }
            })
            .collect();

        json!({
            "model": self.model_name,
            "messages": messages,
            "temperature": request.temperature,
            "max_tokens": request.max_tokens
        })
    }

    fn extract_text(response_json: &Value) -> Option<String> {
        response_json
            .get("choices")
            .and_then(|c| c.as_array())
            .and_then(|c| c.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|v| v.as_str())
            .map(|s| s.trim().to_string())
    }
}

#[async_trait]
impl ChatBackend for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, SummaryError> {
        #[cfg(feature = "debug-logs")]
        info!("Using completion prompt:\n{}", request.prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Requesting completion: {} prompt chars, temperature {}, max {} tokens",
            request.prompt.chars().count(),
            request.temperature,
            request.max_tokens
        );

        let request_body = self.build_request_body(&request);

        let mut headers = reqwest::header::HeaderMap::new();
        let auth_value = format!("Bearer {}", self.api_key)
            .parse()
            .map_err(|e| SummaryError::Http(format!("Invalid Authorization header: {e}")))?;
        headers.insert("Authorization", auth_value);

        let content_type_value = "application/json"
            .parse()
            .map_err(|e| SummaryError::Http(format!("Invalid Content-Type header: {e}")))?;
        headers.insert("Content-Type", content_type_value);

        if let Some(org) = &self.org_id {
            let org_value = org.parse().map_err(|e| {
                SummaryError::Http(format!("Invalid OpenAI-Organization header: {e}"))
            })?;
            headers.insert("OpenAI-Organization", org_value);
        }

        let response = self
            .http
            .post(COMPLETIONS_URL)
            .headers(headers)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SummaryError::Http(format!("OpenAI API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(SummaryError::OpenAi(format!(
                "OpenAI API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| SummaryError::OpenAi(format!("Failed to parse OpenAI response: {e}")))?;

        Self::extract_text(&response_json)
            .ok_or_else(|| SummaryError::OpenAi("No completion candidates in response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> OpenAiClient {
        OpenAiClient::new("test_key".to_string(), None, "gpt-4o-mini".to_string()).unwrap()
    }

    #[test]
    fn test_build_request_body_shape() {
        let client = test_client();
        let body = client.build_request_body(&CompletionRequest {
            prompt: "summarize this".to_string(),
            temperature: 0.5,
            max_tokens: 1000,
        });

        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["temperature"], 0.5);
        assert_eq!(body["max_tokens"], 1000);

        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["role"], "user");
        assert_eq!(messages[0]["content"], "summarize this");
    }

    #[test]
    fn test_extract_text_trims_whitespace() {
        let response = json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": "  \n a summary \n  "
                }
            }]
        });

        assert_eq!(
            OpenAiClient::extract_text(&response),
            Some("a summary".to_string())
        );
    }

    #[test]
    fn test_extract_text_missing_choices() {
        assert_eq!(OpenAiClient::extract_text(&json!({"choices": []})), None);
        assert_eq!(OpenAiClient::extract_text(&json!({})), None);
    }
}
