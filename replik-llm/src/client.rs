//! HTTP chat-completion client.
//!
//! Status codes and transport failures map 1:1 to [`GenerationError`] kinds;
//! the German display strings live on the error enum itself.

use crate::types::{ApiError, CompletionRequest, CompletionResponse};
use crate::ChatTransport;
use async_trait::async_trait;
use replik_core::{GenerationError, GenerationResult};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Connection establishment timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Whole-request timeout, including reading the body.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Reqwest-backed transport for an OpenAI-compatible chat-completion endpoint.
pub struct HttpChatClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpChatClient {
    /// Create a new client for the given endpoint.
    ///
    /// # Arguments
    /// * `base_url` - API root, e.g. `https://openrouter.ai/api/v1`
    /// * `api_key` - Bearer credential; sent only when non-blank
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> GenerationResult<Self> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GenerationError::Unexpected {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    fn map_send_error(error: reqwest::Error) -> GenerationError {
        if error.is_timeout() {
            GenerationError::Timeout
        } else if error.is_connect() {
            GenerationError::NoConnectivity
        } else {
            GenerationError::Transport {
                reason: error.to_string(),
            }
        }
    }

    fn map_status_error(status: StatusCode, body: &str) -> GenerationError {
        match status {
            StatusCode::UNAUTHORIZED => GenerationError::Unauthorized,
            StatusCode::FORBIDDEN => GenerationError::Forbidden,
            StatusCode::TOO_MANY_REQUESTS => GenerationError::RateLimited,
            _ => {
                // Prefer the provider's own error message over the raw body.
                let reason = match serde_json::from_str::<ApiError>(body) {
                    Ok(api_error) => api_error.error.message,
                    Err(_) => format!("API-Fehler: {}", status.as_u16()),
                };
                GenerationError::Transport { reason }
            }
        }
    }
}

#[async_trait]
impl ChatTransport for HttpChatClient {
    async fn complete(&self, request: &CompletionRequest) -> GenerationResult<String> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(model = %request.model, messages = request.messages.len(), "chat completion request");

        let mut builder = self.client.post(&url).json(request);
        if !self.api_key.trim().is_empty() {
            builder = builder.header("Authorization", format!("Bearer {}", self.api_key));
        }

        let response = builder.send().await.map_err(Self::map_send_error)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::map_status_error(status, &body));
        }

        // Misconfigured endpoints answer 200 with an HTML login or error page.
        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.contains("application/json"))
            .unwrap_or(false);

        let body = response.text().await.map_err(|e| GenerationError::Transport {
            reason: e.to_string(),
        })?;

        if !is_json {
            let preview: String = body.chars().take(200).collect();
            return Err(GenerationError::Unexpected {
                message: format!(
                    "HTML statt JSON erhalten. Prüfe API-Key und Anfrage. Details: {}",
                    preview
                ),
            });
        }

        let envelope: CompletionResponse =
            serde_json::from_str(&body).map_err(|e| GenerationError::Unexpected {
                message: format!("Fehler beim Parsen der Antwort: {}", e),
            })?;

        match envelope.first_content() {
            Some(content) if !content.trim().is_empty() => Ok(content.to_string()),
            _ => Err(GenerationError::EmptyReply),
        }
    }
}

impl std::fmt::Debug for HttpChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpChatClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// UNIT TESTS
// ============================================================================
