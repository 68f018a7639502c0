//! Chat-completion wire types.
//!
//! Request types serialize exactly what the service expects; response types
//! are deliberately tolerant so extra or missing envelope fields never fail
//! deserialization.

use serde::{Deserialize, Serialize};

// ============================================================================
// REQUEST TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<i32>,
}

// ============================================================================
// RESPONSE TYPES
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl CompletionResponse {
    /// The first choice's message content, if the envelope carries one.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.as_deref())
    }
}

// ============================================================================
// ERROR BODY
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
}

// ============================================================================
// UNIT TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_skips_absent_optionals() {
        let request = CompletionRequest {
            model: "test-model".to_string(),
            messages: vec![ChatMessage::user("Hallo")],
            temperature: None,
            max_tokens: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("temperature"));
        assert!(!json.contains("max_tokens"));
    }

    #[test]
    fn test_request_serializes_set_optionals() {
        let request = CompletionRequest {
            model: "test-model".to_string(),
            messages: vec![ChatMessage::system("sys"), ChatMessage::user("msg")],
            temperature: Some(0.7),
            max_tokens: Some(500),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"temperature\":0.7"));
        assert!(json.contains("\"max_tokens\":500"));
        assert!(json.contains("\"role\":\"system\""));
    }

    #[test]
    fn test_response_tolerates_extra_and_missing_fields() {
        let json = r#"{
            "id": "cmpl-1",
            "usage": {"prompt_tokens": 10},
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Hallo!"}, "finish_reason": "stop"}
            ]
        }"#;
        let response: CompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_content(), Some("Hallo!"));
    }

    #[test]
    fn test_response_without_choices_has_no_content() {
        let response: CompletionResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.first_content(), None);

        let response: CompletionResponse =
            serde_json::from_str(r#"{"choices": [{"message": null}]}"#).unwrap();
        assert_eq!(response.first_content(), None);
    }

    #[test]
    fn test_error_body_parses() {
        let json = r#"{"error": {"message": "Invalid API key", "type": "auth", "code": "401"}}"#;
        let body: ApiError = serde_json::from_str(json).unwrap();
        assert_eq!(body.error.message, "Invalid API key");
        assert_eq!(body.error.code.as_deref(), Some("401"));
    }
}
