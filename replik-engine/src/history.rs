//! Conversation history collaborator.
//!
//! The pipeline only needs append and a bounded recent-entries accessor;
//! delete and clear exist for the embedding application's history surface.

use async_trait::async_trait;
use replik_core::{ConversationEntry, EntryId, HistoryError};
use tokio::sync::RwLock;

/// Upper bound on retained entries; older ones fall off.
pub const MAX_HISTORY_ENTRIES: usize = 100;

/// Storage for completed generations.
/// Implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Record a completed generation.
    async fn append(&self, entry: ConversationEntry) -> Result<(), HistoryError>;

    /// Up to `limit` most recent entries, newest first.
    async fn recent(&self, limit: usize) -> Result<Vec<ConversationEntry>, HistoryError>;

    /// Remove a single entry. Unknown ids are a no-op.
    async fn delete(&self, id: EntryId) -> Result<(), HistoryError>;

    /// Remove every entry.
    async fn clear(&self) -> Result<(), HistoryError>;
}

/// Bounded in-memory history, newest first. Used by tests and by embedders
/// that bring no persistent store of their own.
#[derive(Debug, Default)]
pub struct InMemoryHistory {
    entries: RwLock<Vec<ConversationEntry>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistory {
    async fn append(&self, entry: ConversationEntry) -> Result<(), HistoryError> {
        let mut entries = self.entries.write().await;
        entries.insert(0, entry);
        entries.truncate(MAX_HISTORY_ENTRIES);
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<ConversationEntry>, HistoryError> {
        let entries = self.entries.read().await;
        Ok(entries.iter().take(limit).cloned().collect())
    }

    async fn delete(&self, id: EntryId) -> Result<(), HistoryError> {
        let mut entries = self.entries.write().await;
        entries.retain(|entry| entry.id != id);
        Ok(())
    }

    async fn clear(&self) -> Result<(), HistoryError> {
        self.entries.write().await.clear();
        Ok(())
    }
}

// ============================================================================
// UNIT TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use replik_core::StyleParameters;

    fn entry(input: &str) -> ConversationEntry {
        ConversationEntry::new(input, StyleParameters::default(), vec!["Ok.".to_string()])
    }

    #[tokio::test]
    async fn test_recent_returns_newest_first() {
        let history = InMemoryHistory::new();
        history.append(entry("erste")).await.unwrap();
        history.append(entry("zweite")).await.unwrap();
        history.append(entry("dritte")).await.unwrap();

        let recent = history.recent(2).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].input_text, "dritte");
        assert_eq!(recent[1].input_text, "zweite");
    }

    #[tokio::test]
    async fn test_capacity_drops_oldest() {
        let history = InMemoryHistory::new();
        for i in 0..(MAX_HISTORY_ENTRIES + 10) {
            history.append(entry(&format!("Nachricht {}", i))).await.unwrap();
        }

        assert_eq!(history.len().await, MAX_HISTORY_ENTRIES);
        let recent = history.recent(1).await.unwrap();
        assert_eq!(
            recent[0].input_text,
            format!("Nachricht {}", MAX_HISTORY_ENTRIES + 9)
        );
    }

    #[tokio::test]
    async fn test_delete_removes_only_matching_entry() {
        let history = InMemoryHistory::new();
        let keep = entry("bleibt");
        let gone = entry("weg");
        let gone_id = gone.id;
        history.append(keep).await.unwrap();
        history.append(gone).await.unwrap();

        history.delete(gone_id).await.unwrap();
        let recent = history.recent(10).await.unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].input_text, "bleibt");

        // Deleting an unknown id is a no-op.
        history.delete(gone_id).await.unwrap();
        assert_eq!(history.len().await, 1);
    }

    #[tokio::test]
    async fn test_clear_empties_store() {
        let history = InMemoryHistory::new();
        history.append(entry("eins")).await.unwrap();
        history.append(entry("zwei")).await.unwrap();

        history.clear().await.unwrap();
        assert!(history.is_empty().await);
    }
}
