//! Conversation history entries.

use crate::style::StyleParameters;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Entry identifier using UUIDv7 for timestamp-sortable IDs.
pub type EntryId = Uuid;

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

/// Generate a new UUIDv7 EntryId (timestamp-sortable).
pub fn new_entry_id() -> EntryId {
    Uuid::now_v7()
}

/// One completed generation: the input message, the effective style, and the
/// five suggestions it produced. Created implicitly on a successful generate
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub id: EntryId,
    pub timestamp: Timestamp,
    pub input_text: String,
    pub style: StyleParameters,
    pub suggestions: Vec<String>,
}

impl ConversationEntry {
    pub fn new(
        input_text: impl Into<String>,
        style: StyleParameters,
        suggestions: Vec<String>,
    ) -> Self {
        Self {
            id: new_entry_id(),
            timestamp: Utc::now(),
            input_text: input_text.into(),
            style,
            suggestions,
        }
    }
}
