//! Error types for generation and history operations.
//!
//! Display strings are the short, German, actionable messages shown to the
//! end user; no raw exception text or stack traces leak through them except
//! inside the `Unexpected` catch-all, which preserves the underlying message
//! for triage.

use thiserror::Error;

/// Typed failure of a generate or rewrite call.
///
/// Validation kinds are returned before any network activity; transport and
/// service kinds map 1:1 from the HTTP layer. Parse irregularities are never
/// represented here - the response parser always degrades to a usable result.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("API-Key fehlt. Bitte in den Einstellungen konfigurieren.")]
    MissingCredentials,

    #[error("Bitte zuerst eine Nachricht eingeben.")]
    InputBlank,

    #[error("Nachricht zu lang (max. {max} Zeichen).")]
    InputTooLong { max: usize },

    #[error("API-Key prüfen")]
    Unauthorized,

    #[error("Zugriff verweigert")]
    Forbidden,

    #[error("Bitte kurz warten")]
    RateLimited,

    #[error("Timeout: Bitte erneut versuchen")]
    Timeout,

    #[error("Kein Internet")]
    NoConnectivity,

    #[error("Netzwerkfehler: {reason}")]
    Transport { reason: String },

    #[error("Leere Antwort von der API")]
    EmptyReply,

    #[error("Unerwarteter Fehler: {message}")]
    Unexpected { message: String },
}

impl GenerationError {
    /// Whether the error was caught before any network activity.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingCredentials | Self::InputBlank | Self::InputTooLong { .. }
        )
    }
}

/// Failure of the history collaborator. Write failures after a successful
/// generation are logged and swallowed, never surfaced to the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("Verlauf konnte nicht gespeichert werden: {reason}")]
    Storage { reason: String },
}

/// Result type alias for pipeline operations.
pub type GenerationResult<T> = Result<T, GenerationError>;

// ============================================================================
// UNIT TESTS
// ============================================================================
