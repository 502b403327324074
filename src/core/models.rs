//! Core data models for address translation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Remote model identifier
pub const MODEL_ID: &str = "glm-4-plus";

/// Sampling temperature sent with every request
pub const TEMPERATURE: f64 = 0.7;

/// Nucleus-sampling threshold sent with every request
pub const TOP_P: f64 = 0.7;

/// Maximum output length sent with every request
pub const MAX_TOKENS: u32 = 1024;

/// Address translation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub address: String,
    pub source_locale: String,
    pub target_locale: String,
}

impl TranslationRequest {
    pub fn new(
        address: impl Into<String>,
        source_locale: impl Into<String>,
        target_locale: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            source_locale: source_locale.into(),
            target_locale: target_locale.into(),
        }
    }
}

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatRole::System => write!(f, "system"),
            ChatRole::User => write!(f, "user"),
            ChatRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// Outgoing chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
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

/// Chat-completion request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
    pub stream: bool,
}

impl ChatCompletionRequest {
    /// Build a request with the fixed generation parameters
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            model: MODEL_ID.to_string(),
            messages,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            max_tokens: MAX_TOKENS,
            stream: false,
        }
    }
}

/// Chat-completion response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub usage: Option<ChatUsage>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if any
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub index: Option<u32>,
    pub message: ChatResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponseMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage reported by the remote service
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ChatUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// One entry of a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchItem {
    #[serde(flatten)]
    pub request: TranslationRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchItem {
    pub fn from_result(
        request: TranslationRequest,
        result: crate::core::errors::Result<String>,
    ) -> Self {
        match result {
            Ok(translation) => Self {
                request,
                translation: Some(translation),
                error: None,
            },
            Err(e) => Self {
                request,
                translation: None,
                error: Some(e.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    #[test]
    fn test_request_uses_fixed_parameters() {
        let request = ChatCompletionRequest::new(vec![
            ChatMessage::system("sys"),
            ChatMessage::user("usr"),
        ]);

        assert_json_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "glm-4-plus",
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "usr"}
                ],
                "temperature": 0.7,
                "top_p": 0.7,
                "max_tokens": 1024,
                "stream": false
            })
        );
    }

    #[test]
    fn test_response_first_content() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "id": "abc",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "A"}, "finish_reason": "stop"},
                {"index": 1, "message": {"role": "assistant", "content": "B"}}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 2, "total_tokens": 12}
        }))
        .unwrap();

        assert_eq!(response.first_content(), Some("A"));
        assert_eq!(response.usage.unwrap().total_tokens, 12);
    }

    #[test]
    fn test_response_without_choices_is_rejected() {
        let parsed = serde_json::from_value::<ChatCompletionResponse>(json!({"id": "abc"}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_batch_item_serialization() {
        let request = TranslationRequest::new("北京市朝阳区", "zh-CN", "en-US");
        let item = BatchItem::from_result(request, Ok("Chaoyang District, Beijing".to_string()));

        assert_json_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({
                "address": "北京市朝阳区",
                "source_locale": "zh-CN",
                "target_locale": "en-US",
                "translation": "Chaoyang District, Beijing"
            })
        );
    }
}
