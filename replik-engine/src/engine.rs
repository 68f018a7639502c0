//! Generation orchestrator.
//!
//! Sequences one generate or rewrite call: validation, optional style
//! auto-detection, prompt and context assembly, session acquisition, the
//! transport call, parsing, the single stricter retry, and the history
//! write. Validation failures precede any network activity; retry and
//! history failures are swallowed, never surfaced.

use crate::classify::classify;
use crate::context::{assemble_context, CONTEXT_WINDOW};
use crate::history::HistoryStore;
use crate::parse::{parse_rewrite_reply, parse_suggestions};
use crate::prompt;
use crate::retry::{select_result, should_retry};
use replik_core::{
    ConversationEntry, GenerationError, GenerationResult, RewriteIntent, Settings,
    StyleParameters,
};
use replik_llm::{
    ChatMessage, CompletionRequest, HttpChatClient, SessionCache, SharedTransport,
    TransportFactory,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Longest accepted input message, in characters.
pub const MAX_MESSAGE_CHARS: usize = 4000;

const FIRST_ATTEMPT_TEMPERATURE: f32 = 0.7;
const RETRY_TEMPERATURE: f32 = 0.3;
const GENERATE_MAX_TOKENS: i32 = 500;
const REWRITE_MAX_TOKENS: i32 = 200;

/// The two collaborator-facing operations of the pipeline.
pub struct ReplyEngine {
    sessions: SessionCache,
    history: Arc<dyn HistoryStore>,
}

impl ReplyEngine {
    /// Engine over the reqwest-backed HTTP transport.
    pub fn new(history: Arc<dyn HistoryStore>) -> Self {
        let factory: TransportFactory = Box::new(|base_url, api_key| {
            Ok(Arc::new(HttpChatClient::new(base_url, api_key)?) as SharedTransport)
        });
        Self::with_transport_factory(factory, history)
    }

    /// Engine over an injected transport factory, for tests and custom
    /// transports.
    pub fn with_transport_factory(
        factory: TransportFactory,
        history: Arc<dyn HistoryStore>,
    ) -> Self {
        Self {
            sessions: SessionCache::new(factory),
            history,
        }
    }

    /// Drop the cached transport session. The settings collaborator calls
    /// this after saving a changed base URL or API key.
    pub async fn invalidate_session(&self) {
        self.sessions.invalidate().await;
    }

    /// Generate five reply suggestions for a pasted message.
    pub async fn generate(
        &self,
        message: &str,
        style: &StyleParameters,
        settings: &Settings,
    ) -> GenerationResult<Vec<String>> {
        validate_message(message, settings)?;

        let effective_style = if settings.auto_detect_style {
            classify(message).apply_to(*style)
        } else {
            *style
        };

        let user_prompt = prompt::generate_prompt(message, &effective_style);
        let context = if settings.use_context {
            match self.history.recent(CONTEXT_WINDOW).await {
                Ok(entries) => assemble_context(&entries),
                Err(error) => {
                    warn!(%error, "history unavailable, generating without context");
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        let transport = self
            .sessions
            .acquire(&settings.base_url, &settings.api_key)
            .await?;

        let request =
            completion_request(settings, &context, &user_prompt, FIRST_ATTEMPT_TEMPERATURE);
        let reply = transport.complete(&request).await?;
        let first = parse_suggestions(&reply);

        let result = if should_retry(&first) {
            debug!("first parse was heuristic, issuing one stricter retry");
            let retry_request = completion_request(
                settings,
                &context,
                &prompt::retry_directive(&user_prompt),
                RETRY_TEMPERATURE,
            );
            let retry = match transport.complete(&retry_request).await {
                Ok(text) => Some(parse_suggestions(&text)),
                Err(error) => {
                    warn!(%error, "retry call failed, keeping first result");
                    None
                }
            };
            select_result(first, retry)
        } else {
            first
        };

        let entry = ConversationEntry::new(message, effective_style, result.suggestions.clone());
        if let Err(error) = self.history.append(entry).await {
            warn!(%error, "history write failed after successful generation");
        }

        Ok(result.suggestions)
    }

    /// Rework one previously selected suggestion. Single call, no retry, no
    /// history write.
    pub async fn rewrite(
        &self,
        original: Option<&str>,
        suggestion: &str,
        intent: RewriteIntent,
        settings: &Settings,
    ) -> GenerationResult<String> {
        if !settings.has_credentials() {
            return Err(GenerationError::MissingCredentials);
        }
        if suggestion.trim().is_empty() {
            return Err(GenerationError::InputBlank);
        }

        let user_prompt = prompt::rewrite_prompt(original, suggestion, intent);
        let transport = self
            .sessions
            .acquire(&settings.base_url, &settings.api_key)
            .await?;

        let request = CompletionRequest {
            model: settings.model.clone(),
            messages: vec![
                ChatMessage::system(prompt::system_prompt()),
                ChatMessage::user(user_prompt),
            ],
            temperature: Some(FIRST_ATTEMPT_TEMPERATURE),
            max_tokens: Some(REWRITE_MAX_TOKENS),
        };
        let reply = transport.complete(&request).await?;
        Ok(parse_rewrite_reply(&reply))
    }
}

impl std::fmt::Debug for ReplyEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplyEngine")
            .field("sessions", &self.sessions)
            .finish_non_exhaustive()
    }
}

fn validate_message(message: &str, settings: &Settings) -> GenerationResult<()> {
    if !settings.has_credentials() {
        return Err(GenerationError::MissingCredentials);
    }
    if message.trim().is_empty() {
        return Err(GenerationError::InputBlank);
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(GenerationError::InputTooLong {
            max: MAX_MESSAGE_CHARS,
        });
    }
    Ok(())
}

fn completion_request(
    settings: &Settings,
    context: &[ChatMessage],
    user_prompt: &str,
    temperature: f32,
) -> CompletionRequest {
    let mut messages = Vec::with_capacity(context.len() + 2);
    messages.push(ChatMessage::system(prompt::system_prompt()));
    messages.extend_from_slice(context);
    messages.push(ChatMessage::user(user_prompt));

    CompletionRequest {
        model: settings.model.clone(),
        messages,
        temperature: Some(temperature),
        max_tokens: Some(GENERATE_MAX_TOKENS),
    }
}

// ============================================================================
// UNIT TESTS
// ============================================================================
