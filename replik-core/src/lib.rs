//! REPLIK Core - Domain Types
//!
//! Pure data structures for the reply suggestion pipeline. All other crates
//! depend on this. This crate contains ONLY data types and their invariants -
//! no transport, no orchestration.

pub mod entry;
pub mod error;
pub mod reply;
pub mod settings;
pub mod style;

pub use entry::{new_entry_id, ConversationEntry, EntryId, Timestamp};
pub use error::{GenerationError, GenerationResult, HistoryError};
pub use reply::{ParseProvenance, ParseResult, SUGGESTION_COUNT};
pub use settings::Settings;
pub use style::{
    EmojiLevel, Formality, Goal, Length, RewriteIntent, StyleParameters, StyleSignal, Tone,
};
