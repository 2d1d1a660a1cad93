//! Match breakdown returned by [`FuzzyMatcher::explain`](super::FuzzyMatcher::explain)

use serde::{Deserialize, Serialize};

use super::tiers::Tier;
use crate::Language;

/// How a comparison finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Normalized inputs were identical
    Identical,
    /// Token counts too far apart to be worth matching
    LengthMismatch,
    /// No token of the shorter side matched anything
    NoTokensMatched,
    /// Full pipeline ran
    Scored,
}

/// One token of the shorter sequence paired with a longer-sequence token
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenMatch {
    pub token: String,
    pub candidate: String,
    pub tier: Tier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<usize>,
    /// Net tally contribution
    pub credit: f64,
}

/// Full breakdown of a single comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub language: Language,
    pub outcome: Outcome,
    /// False when stopword filtering emptied a side and was abandoned
    pub stopwords_removed: bool,
    /// Shorter sequence after matching (matched tokens rewritten to their candidates)
    pub shorter: Vec<String>,
    pub longer: Vec<String>,
    pub matches: Vec<TokenMatch>,
    /// Shorter-sequence tokens that matched nothing
    pub dropped: Vec<String>,
    pub inversions: usize,
    pub tally: f64,
    /// `floor(tally / |longer| * 100)` before clamping
    pub raw_score: i64,
    /// Raw score clamped into 0..=100
    pub score: u8,
}

impl MatchReport {
    pub(crate) fn short_circuit(language: Language, outcome: Outcome, score: u8) -> Self {
        Self {
            language,
            outcome,
            stopwords_removed: false,
            shorter: Vec::new(),
            longer: Vec::new(),
            matches: Vec::new(),
            dropped: Vec::new(),
            inversions: 0,
            tally: 0.0,
            raw_score: i64::from(score),
            score,
        }
    }
}
