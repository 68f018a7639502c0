//! Settings snapshot supplied by the embedding application.

use crate::style::StyleParameters;
use serde::{Deserialize, Serialize};

/// Everything a single generate/rewrite call needs to know about the user's
/// configuration. The credential and preference store of the host application
/// owns persistence; the pipeline only ever sees immutable snapshots.
///
/// There is deliberately no bundled fallback API key: a blank `api_key` fails
/// validation instead of silently using a compiled-in credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub default_style: StyleParameters,
    /// Prepend recent conversation turns to the prompt.
    pub use_context: bool,
    /// Infer tone/formality from the pasted message per call.
    pub auto_detect_style: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://openrouter.ai/api/v1".to_string(),
            model: "meta-llama/llama-3.3-70b-instruct:free".to_string(),
            default_style: StyleParameters::default(),
            use_context: true,
            auto_detect_style: true,
        }
    }
}

impl Settings {
    /// True when both the API key and the base URL are usable.
    pub fn has_credentials(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.base_url.trim().is_empty()
    }
}
