//! Ruleset selection for a comparison

use serde::{Deserialize, Serialize};

/// Language ruleset applied to both sides of a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ja")]
    Japanese,
}

impl Language {
    /// Pick the ruleset from the first input only.
    ///
    /// Any ASCII letter selects English, regardless of what else the string
    /// holds. Everything else, including empty, digit-only and symbol-only
    /// input, falls back to Japanese.
    pub fn detect(text: &str) -> Self {
        if text.chars().any(|c| c.is_ascii_alphabetic()) {
            Self::English
        } else {
            Self::Japanese
        }
    }

    /// Short language code ("en" / "ja")
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Japanese => "ja",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
