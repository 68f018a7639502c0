//! Style axis enums and the inferred style signal.

use serde::{Deserialize, Serialize};

// ============================================================================
// STYLE AXES
// ============================================================================

/// Tone of voice for generated replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    Friendly,
    Neutral,
    Terse,
    Warm,
    Assertive,
    Flirty,
}

/// Communicative goal the reply should accomplish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Goal {
    Accept,
    Decline,
    Postpone,
    AskBack,
    Thank,
    SetBoundary,
}

/// Target length of each reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Length {
    OneSentence,
    Short,
    Normal,
}

/// How liberally replies may use emojis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmojiLevel {
    Off,
    Light,
    Normal,
}

/// German address form: informal "du" vs. formal "Sie".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formality {
    Informal,
    Formal,
}

/// Transformation applied when the user asks to rework a single suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewriteIntent {
    Shorten,
    WarmUp,
    MoreDirect,
    StripEmoji,
    AppendQuestion,
}

impl Tone {
    /// German display label for UI surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Friendly => "Freundlich",
            Self::Neutral => "Neutral",
            Self::Terse => "Kurz",
            Self::Warm => "Herzlich",
            Self::Assertive => "Bestimmt",
            Self::Flirty => "Flirty",
        }
    }
}

impl Goal {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Accept => "Zusagen",
            Self::Decline => "Absagen",
            Self::Postpone => "Verschieben",
            Self::AskBack => "Nachfragen",
            Self::Thank => "Bedanken",
            Self::SetBoundary => "Abgrenzen",
        }
    }
}

impl Length {
    pub fn label(&self) -> &'static str {
        match self {
            Self::OneSentence => "1 Satz",
            Self::Short => "Kurz",
            Self::Normal => "Normal",
        }
    }
}

impl EmojiLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Off => "Aus",
            Self::Light => "Wenig",
            Self::Normal => "Normal",
        }
    }
}

impl Formality {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Informal => "Du",
            Self::Formal => "Sie",
        }
    }
}

impl RewriteIntent {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Shorten => "Kürzer",
            Self::WarmUp => "Freundlicher",
            Self::MoreDirect => "Direkter",
            Self::StripEmoji => "Ohne Emojis",
            Self::AppendQuestion => "Mit Rückfrage",
        }
    }
}

// ============================================================================
// STYLE PARAMETERS
// ============================================================================

/// Immutable bundle of the five style axes for one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleParameters {
    pub tone: Tone,
    pub goal: Goal,
    pub length: Length,
    pub emoji_level: EmojiLevel,
    pub formality: Formality,
}

impl Default for StyleParameters {
    fn default() -> Self {
        Self {
            tone: Tone::Friendly,
            goal: Goal::AskBack,
            length: Length::Normal,
            emoji_level: EmojiLevel::Light,
            formality: Formality::Informal,
        }
    }
}

/// Tone/formality inferred from free text. Either axis may be absent when the
/// text carries no signal or contradicting signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StyleSignal {
    pub tone: Option<Tone>,
    pub formality: Option<Formality>,
}

impl StyleSignal {
    /// Overlay the resolved axes onto `base`, leaving unresolved axes alone.
    pub fn apply_to(&self, base: StyleParameters) -> StyleParameters {
        StyleParameters {
            tone: self.tone.unwrap_or(base.tone),
            formality: self.formality.unwrap_or(base.formality),
            ..base
        }
    }
}

// ============================================================================
// UNIT TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_parameters() {
        let style = StyleParameters::default();
        assert_eq!(style.tone, Tone::Friendly);
        assert_eq!(style.goal, Goal::AskBack);
        assert_eq!(style.length, Length::Normal);
        assert_eq!(style.emoji_level, EmojiLevel::Light);
        assert_eq!(style.formality, Formality::Informal);
    }

    #[test]
    fn test_labels_are_german() {
        assert_eq!(Tone::Terse.label(), "Kurz");
        assert_eq!(Goal::SetBoundary.label(), "Abgrenzen");
        assert_eq!(Formality::Formal.label(), "Sie");
        assert_eq!(RewriteIntent::AppendQuestion.label(), "Mit Rückfrage");
    }

    #[test]
    fn test_signal_partial_override() {
        let base = StyleParameters::default();
        let signal = StyleSignal {
            tone: Some(Tone::Flirty),
            formality: None,
        };
        let merged = signal.apply_to(base);
        assert_eq!(merged.tone, Tone::Flirty);
        assert_eq!(merged.formality, base.formality);
        assert_eq!(merged.goal, base.goal);
    }

    #[test]
    fn test_empty_signal_is_identity() {
        let base = StyleParameters {
            tone: Tone::Assertive,
            goal: Goal::Decline,
            length: Length::OneSentence,
            emoji_level: EmojiLevel::Off,
            formality: Formality::Formal,
        };
        assert_eq!(StyleSignal::default().apply_to(base), base);
    }
}
