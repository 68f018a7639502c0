//! Regex-based tone/formality inference.
//!
//! The classifier examines the pasted message for address and mood signals:
//! formal salutations, informal pronouns, gratitude words, flirtation
//! markers. Signal sets are data-driven tables so patterns can be tuned
//! without touching the decision logic. All patterns are word-boundary
//! anchored; the formal pronouns stay case-sensitive because only the
//! capitalized forms ("Sie", "Ihnen") are an address signal in German.

use once_cell::sync::Lazy;
use regex::Regex;
use replik_core::{Formality, StyleSignal, Tone};

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).expect("invalid signal pattern"))
        .collect()
}

static FORMAL_SIGNALS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)\bSehr geehrt(e|er|en|es)?\b",
        r"(?i)\bMit freundlichen Gr(ue|ü)(ß|ss)en\b",
        r"(?i)\bGuten Tag\b",
        r"\bHerr\b",
        r"\bFrau\b",
        r"\bSie\b",
        r"\bIhnen\b",
        r"\bIhr(e|en|er|em)?\b",
    ])
});

static INFORMAL_SIGNALS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)\bdu\b",
        r"(?i)\bdich\b",
        r"(?i)\bdir\b",
        r"(?i)\bdein\w*\b",
        r"(?i)\bhey\b",
        r"(?i)\bhi\b",
        r"(?i)\bhallo\b",
        r"(?i)\blg\b",
        r"(?i)\bliebe?r?\b",
    ])
});

static FLIRTY_SIGNALS: Lazy<Vec<Regex>> =
    Lazy::new(|| compile(&[r"(?i)\b(schatz|babe|sexy|date)\b"]));

static WARM_SIGNALS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)\bdanke(n| dir| euch)?\b",
        r"(?i)\bfreu(e|en|st|t)?\b",
        r"(?i)\bliebe?n?\b",
        r"(?i)\blg\b",
        r"(?i)\bgr(ue|ü)(ß|ss)e?\b",
    ])
});

fn any_match(signals: &[Regex], text: &str) -> bool {
    signals.iter().any(|signal| signal.is_match(text))
}

/// Infer tone and formality from free text.
///
/// Formality resolves only when exactly one address register matches;
/// contradicting or absent signals leave it open. Tone priority: flirtation
/// beats warmth beats the register-derived default. Blank input yields an
/// empty signal.
pub fn classify(text: &str) -> StyleSignal {
    let normalized = text.trim();
    if normalized.is_empty() {
        return StyleSignal::default();
    }

    let has_formal = any_match(&FORMAL_SIGNALS, normalized);
    let has_informal = any_match(&INFORMAL_SIGNALS, normalized);

    let formality = match (has_formal, has_informal) {
        (true, false) => Some(Formality::Formal),
        (false, true) => Some(Formality::Informal),
        _ => None,
    };

    let tone = if any_match(&FLIRTY_SIGNALS, normalized) {
        Some(Tone::Flirty)
    } else if any_match(&WARM_SIGNALS, normalized) {
        Some(Tone::Warm)
    } else {
        match formality {
            Some(Formality::Formal) => Some(Tone::Neutral),
            Some(Formality::Informal) => Some(Tone::Friendly),
            None => None,
        }
    };

    StyleSignal { tone, formality }
}

// ============================================================================
// UNIT TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formal_letter_is_formal_neutral() {
        let signal = classify(
            "Sehr geehrte Damen und Herren, ich melde mich wegen des Termins. \
             Mit freundlichen Grüßen",
        );
        assert_eq!(signal.formality, Some(Formality::Formal));
        assert_eq!(signal.tone, Some(Tone::Neutral));
    }

    #[test]
    fn test_casual_question_is_informal_friendly() {
        let signal = classify("Hey, kannst du mir helfen?");
        assert_eq!(signal.formality, Some(Formality::Informal));
        assert_eq!(signal.tone, Some(Tone::Friendly));
    }

    #[test]
    fn test_flirtation_beats_other_tones() {
        let signal = classify("Hi Schatz, wie war dein Tag?");
        assert_eq!(signal.formality, Some(Formality::Informal));
        assert_eq!(signal.tone, Some(Tone::Flirty));
    }

    #[test]
    fn test_gratitude_is_warm() {
        let signal = classify("Danke dir, hat mich sehr gefreut!");
        assert_eq!(signal.formality, Some(Formality::Informal));
        assert_eq!(signal.tone, Some(Tone::Warm));
    }

    #[test]
    fn test_blank_input_carries_no_signal() {
        assert_eq!(classify(""), StyleSignal::default());
        assert_eq!(classify("   \n\t"), StyleSignal::default());
    }

    #[test]
    fn test_mixed_registers_leave_formality_open() {
        // "Hallo" is informal, "Herr" is formal; neither register wins.
        let signal = classify("Hallo Herr Müller");
        assert_eq!(signal.formality, None);
        assert_eq!(signal.tone, None);
    }

    #[test]
    fn test_formal_pronoun_is_case_sensitive() {
        // Lowercase "sie" is third person, not an address form.
        let signal = classify("Kommt sie morgen vorbei?");
        assert_eq!(signal.formality, None);

        let signal = classify("Können Sie das bestätigen?");
        assert_eq!(signal.formality, Some(Formality::Formal));
    }

    #[test]
    fn test_no_substring_false_positives() {
        // "Sie" inside "Siegfried" and "du" inside "Dublin" must not match.
        let signal = classify("Siegfried fliegt nach Dublin.");
        assert_eq!(signal.formality, None);
        assert_eq!(signal.tone, None);
    }

    #[test]
    fn test_signal_with_no_register_has_no_tone_default() {
        // Plain statement without address or mood words.
        let signal = classify("Das Paket kommt morgen an.");
        assert_eq!(signal.formality, None);
        assert_eq!(signal.tone, None);
    }
}
