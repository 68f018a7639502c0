//! Conversation window assembly.

use replik_core::ConversationEntry;
use replik_llm::ChatMessage;

/// How many recent history entries feed the prompt when conversational
/// memory is enabled.
pub const CONTEXT_WINDOW: usize = 5;

/// Build alternating user/assistant turns from recent history.
///
/// `entries` arrive newest first, the order the history store hands them
/// out; the prompt wants them oldest to newest. The assistant turn is each
/// entry's first stored suggestion, or an empty string when the entry
/// carries none. The result slots between the system instruction and the
/// current user instruction.
pub fn assemble_context(entries: &[ConversationEntry]) -> Vec<ChatMessage> {
    entries
        .iter()
        .rev()
        .flat_map(|entry| {
            let assistant = entry.suggestions.first().cloned().unwrap_or_default();
            [
                ChatMessage::user(entry.input_text.clone()),
                ChatMessage::assistant(assistant),
            ]
        })
        .collect()
}

// ============================================================================
// UNIT TESTS
// ============================================================================
