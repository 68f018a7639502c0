//! REPLIK Engine - Suggestion Pipeline
//!
//! Turns a pasted message into five German reply suggestions: style
//! classification, prompt composition, the tolerant multi-tier response
//! parser, the single-shot stricter retry, and the orchestrator exposing
//! `generate` / `rewrite` to the rendering layer.

pub mod classify;
pub mod context;
pub mod engine;
pub mod history;
pub mod parse;
pub mod prompt;
pub mod retry;

pub use classify::classify;
pub use context::{assemble_context, CONTEXT_WINDOW};
pub use engine::{ReplyEngine, MAX_MESSAGE_CHARS};
pub use history::{HistoryStore, InMemoryHistory, MAX_HISTORY_ENTRIES};
pub use parse::{parse_rewrite_reply, parse_suggestions};
pub use retry::{select_result, should_retry};
