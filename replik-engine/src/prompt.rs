//! Prompt composition for generation and rewrite calls.
//!
//! Pure, total functions over the style axes; every enum value maps to a
//! German description embedded in the user instruction. The system prompt
//! pins the output contract: German, exactly five suggestions, JSON only.

use replik_core::{EmojiLevel, Formality, Goal, Length, RewriteIntent, StyleParameters, Tone};

const SYSTEM_PROMPT: &str = r#"Du bist ein Assistent, der kurze, präzise Antwortvorschläge für Nachrichten erstellt.
Regeln:
- Sprache: IMMER Deutsch
- Output: IMMER genau 5 Antwortvorschläge als JSON: {"suggestions": ["Antwort 1", "Antwort 2", "Antwort 3", "Antwort 4", "Antwort 5"]}
- Keine Erklärungen, keine zusätzlichen Texte, nur das JSON
- Keine erfundenen Details oder Kontext
- Wenn die Nachricht unklar ist: mindestens eine der 5 Antworten sollte eine Rückfrage sein
- Halte dich strikt an die vorgegebenen Parameter (Ton, Ziel, Länge, Emojis, Du/Sie)"#;

/// Fixed system instruction sent with every call.
pub fn system_prompt() -> &'static str {
    SYSTEM_PROMPT
}

fn tone_description(tone: Tone) -> &'static str {
    match tone {
        Tone::Friendly => "freundlich und warm",
        Tone::Neutral => "neutral und sachlich",
        Tone::Terse => "sehr kurz und knapp",
        Tone::Warm => "herzlich und persönlich",
        Tone::Assertive => "bestimmt und klar",
        Tone::Flirty => "spielerisch und flirtend",
    }
}

fn goal_description(goal: Goal) -> &'static str {
    match goal {
        Goal::Accept => "einer Zusage",
        Goal::Decline => "einer höflichen Absage",
        Goal::Postpone => "einer Verschiebung auf später",
        Goal::AskBack => "einer Nachfrage",
        Goal::Thank => "einer Dankesbekundung",
        Goal::SetBoundary => "einer höflichen, aber klaren Abgrenzung",
    }
}

fn length_description(length: Length) -> &'static str {
    match length {
        Length::OneSentence => "nur einen Satz lang",
        Length::Short => "kurz (2-3 Sätze)",
        Length::Normal => "normal lang (3-5 Sätze)",
    }
}

fn emoji_description(level: EmojiLevel) -> &'static str {
    match level {
        EmojiLevel::Off => "keine Emojis",
        EmojiLevel::Light => "sparsam mit Emojis (max. 1 pro Antwort)",
        EmojiLevel::Normal => "normale Emoji-Nutzung (2-3 pro Antwort)",
    }
}

fn address_description(formality: Formality) -> &'static str {
    match formality {
        Formality::Informal => "Du",
        Formality::Formal => "Sie",
    }
}

/// User instruction for a generate call: the message verbatim plus the
/// description of each style axis.
pub fn generate_prompt(message: &str, style: &StyleParameters) -> String {
    format!(
        "Originalnachricht:\n\"{}\"\n\n\
         Erstelle genau 5 Antwortvorschläge mit folgenden Parametern:\n\
         - Ton: {}\n\
         - Ziel: {}\n\
         - Länge: {}\n\
         - Emojis: {}\n\
         - Anrede: {}\n\n\
         Gib nur das JSON zurück, keine weiteren Erklärungen.",
        message,
        tone_description(style.tone),
        goal_description(style.goal),
        length_description(style.length),
        emoji_description(style.emoji_level),
        address_description(style.formality),
    )
}

/// User instruction for a rewrite call over one previously selected
/// suggestion. The reply contract is `{"text": "..."}`.
pub fn rewrite_prompt(
    original: Option<&str>,
    suggestion: &str,
    intent: RewriteIntent,
) -> String {
    let instruction = match intent {
        RewriteIntent::Shorten => "Kürze diese Antwort deutlich, behalte aber die Kernaussage.",
        RewriteIntent::WarmUp => "Mache diese Antwort freundlicher und wärmer.",
        RewriteIntent::MoreDirect => "Mache diese Antwort direkter und klarer.",
        RewriteIntent::StripEmoji => "Entferne alle Emojis aus dieser Antwort.",
        RewriteIntent::AppendQuestion => "Füge eine kurze Rückfrage an diese Antwort an.",
    };

    let context = match original {
        Some(original) => format!("\nOriginalnachricht: \"{}\"\n", original),
        None => "\n".to_string(),
    };

    format!(
        "{}\nAktuelle Antwort:\n\"{}\"\n\n{}\n\n\
         Gib nur das überarbeitete JSON zurück: {{\"text\": \"überarbeitete Antwort\"}}\n\
         Keine Erklärungen.",
        context, suggestion, instruction,
    )
}

/// The stricter instruction used for the single automatic retry.
pub fn retry_directive(user_prompt: &str) -> String {
    format!(
        "{}\n\nWichtig: Antworte ausschliesslich mit gueltigem JSON, \
         ohne Markdown oder zusaetzliche Zeichen.",
        user_prompt
    )
}

// ============================================================================
// UNIT TESTS
// ============================================================================
