//! REPLIK LLM - Chat-Completion Transport
//!
//! The transport boundary of the pipeline: wire types, the [`ChatTransport`]
//! trait, the reqwest-backed [`HttpChatClient`], and the credential-keyed
//! [`SessionCache`]. A scripted [`MockTransport`] ships in the library proper
//! so downstream crates can test orchestration without a network.

pub mod client;
pub mod session;
pub mod types;

pub use client::HttpChatClient;
pub use session::{SessionCache, TransportFactory};
pub use types::{ChatMessage, Choice, CompletionRequest, CompletionResponse, ResponseMessage};

use async_trait::async_trait;
use replik_core::{GenerationError, GenerationResult};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Asynchronous call into the generative service.
///
/// Implementations return the first choice's message content of a successful
/// completion, or the typed failure the orchestrator surfaces verbatim.
/// Implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> GenerationResult<String>;
}

/// Shared handle to a live transport session.
pub type SharedTransport = Arc<dyn ChatTransport>;

// ============================================================================
// MOCK TRANSPORT FOR TESTING
// ============================================================================

/// Scripted transport for tests.
///
/// Outcomes are consumed in push order; every request is recorded so tests
/// can assert on temperature, token limits, and message layout.
#[derive(Default)]
pub struct MockTransport {
    script: Mutex<VecDeque<GenerationResult<String>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply body.
    pub fn push_content(&self, content: impl Into<String>) {
        self.script
            .lock()
            .expect("mock script lock")
            .push_back(Ok(content.into()));
    }

    /// Queue a transport failure.
    pub fn push_error(&self, error: GenerationError) {
        self.script
            .lock()
            .expect("mock script lock")
            .push_back(Err(error));
    }

    /// All requests seen so far, in call order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().expect("mock request lock").clone()
    }

    /// Number of calls made against this transport.
    pub fn call_count(&self) -> usize {
        self.requests.lock().expect("mock request lock").len()
    }
}

#[async_trait]
impl ChatTransport for MockTransport {
    async fn complete(&self, request: &CompletionRequest) -> GenerationResult<String> {
        self.requests
            .lock()
            .expect("mock request lock")
            .push(request.clone());

        self.script
            .lock()
            .expect("mock script lock")
            .pop_front()
            .unwrap_or_else(|| {
                Err(GenerationError::Unexpected {
                    message: "MockTransport: kein Skript-Eintrag mehr".to_string(),
                })
            })
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("calls", &self.call_count())
            .finish()
    }
}

// ============================================================================
// UNIT TESTS
// ============================================================================
