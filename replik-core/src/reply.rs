//! Reply interpretation primitive types.
//!
//! Pure data types for parsed service replies. The parsing tiers themselves
//! live in replik-engine.

use serde::{Deserialize, Serialize};

/// Number of suggestions every parse produces, no matter how degraded the
/// service reply was.
pub const SUGGESTION_COUNT: usize = 5;

/// Which interpretation tier produced a suggestion list.
///
/// `DirectJson`, `NestedJson` and `ChoiceList` mean the reply was structurally
/// well-formed; `Heuristic` means best-effort text splitting was required.
/// Never shown to the end user, but it governs whether a stricter retry call
/// is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParseProvenance {
    /// Top-level `{"suggestions": [...]}` object with a full set of entries.
    DirectJson,
    /// `suggestions` object nested inside a chat-completion envelope.
    NestedJson,
    /// One candidate per envelope choice.
    ChoiceList,
    /// Best-effort splitting, padding, or synthesis.
    Heuristic,
}

impl ParseProvenance {
    /// Whether the reply was structurally trustworthy.
    pub fn is_structured(&self) -> bool {
        !matches!(self, Self::Heuristic)
    }
}

/// A normalized suggestion list together with its provenance.
///
/// Invariant: `suggestions` holds exactly [`SUGGESTION_COUNT`] non-blank,
/// duplicate-free entries in relevance order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    pub suggestions: Vec<String>,
    pub provenance: ParseProvenance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_heuristic_is_unstructured() {
        assert!(ParseProvenance::DirectJson.is_structured());
        assert!(ParseProvenance::NestedJson.is_structured());
        assert!(ParseProvenance::ChoiceList.is_structured());
        assert!(!ParseProvenance::Heuristic.is_structured());
    }
}
