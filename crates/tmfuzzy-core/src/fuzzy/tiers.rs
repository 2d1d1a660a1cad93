//! Token similarity tiers
//!
//! Each tier compares one token from the shorter sequence against one
//! candidate from the longer sequence:
//!
//! 1. Exact match (credit: 1.0)
//! 2. Containment match (credit: 0.85)
//! 3. Edit distance match (credit: 1.0 minus 0.3 per edit)
//!
//! Lengths are counted in characters.

use serde::{Deserialize, Serialize};

use crate::distance::edit_distance;
use crate::MatcherConfig;

/// Which tier paired two tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Exact,
    Containment,
    EditDistance,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Containment => write!(f, "containment"),
            Self::EditDistance => write!(f, "edit_distance"),
        }
    }
}

/// Match result from a tier
#[derive(Debug, Clone, PartialEq)]
pub struct TierMatch {
    pub tier: Tier,
    /// Added to the tally
    pub credit: f64,
    /// Subtracted from the tally after the credit
    pub penalty: f64,
    /// Edit distance, for edit-distance matches only
    pub distance: Option<usize>,
}

impl TierMatch {
    fn new(tier: Tier, credit: f64) -> Self {
        Self {
            tier,
            credit,
            penalty: 0.0,
            distance: None,
        }
    }

    /// Credit minus penalty
    pub fn net(&self) -> f64 {
        self.credit - self.penalty
    }
}

/// A token pair arranged by character length, longer side second
struct Pair<'a> {
    short: &'a str,
    short_len: usize,
    long: &'a str,
    long_len: usize,
}

impl<'a> Pair<'a> {
    /// The candidate counts as the longer side unless it is strictly shorter
    fn new(token: &'a str, candidate: &'a str) -> Self {
        let token_len = token.chars().count();
        let candidate_len = candidate.chars().count();
        if candidate_len < token_len {
            Self {
                short: candidate,
                short_len: candidate_len,
                long: token,
                long_len: token_len,
            }
        } else {
            Self {
                short: token,
                short_len: token_len,
                long: candidate,
                long_len: candidate_len,
            }
        }
    }
}

/// Try exact match (case-sensitive)
#[inline]
pub fn exact_match(token: &str, candidate: &str, config: &MatcherConfig) -> Option<TierMatch> {
    if token == candidate {
        Some(TierMatch::new(Tier::Exact, config.exact_credit))
    } else {
        None
    }
}

/// Try containment match: the longer token holds the shorter one as a substring
#[inline]
pub fn containment_match(
    token: &str,
    candidate: &str,
    config: &MatcherConfig,
) -> Option<TierMatch> {
    let pair = Pair::new(token, candidate);
    containment(&pair, config)
}

fn containment(pair: &Pair<'_>, config: &MatcherConfig) -> Option<TierMatch> {
    if pair.short_len >= config.containment_min_len
        && pair.long_len >= config.containment_min_len
        && contains(pair.long, pair.short)
    {
        Some(TierMatch::new(Tier::Containment, config.containment_credit))
    } else {
        None
    }
}

/// Try bounded edit distance match
#[inline]
pub fn edit_distance_match(
    token: &str,
    candidate: &str,
    config: &MatcherConfig,
) -> Option<TierMatch> {
    let pair = Pair::new(token, candidate);
    edit(&pair, config)
}

fn edit(pair: &Pair<'_>, config: &MatcherConfig) -> Option<TierMatch> {
    if pair.short_len < config.edit_min_len || pair.long_len < config.edit_min_len {
        return None;
    }
    let distance = edit_distance(pair.long, pair.short);
    if distance > config.max_edit_distance {
        return None;
    }
    Some(TierMatch {
        tier: Tier::EditDistance,
        credit: config.edit_credit,
        penalty: distance as f64 * config.edit_penalty,
        distance: Some(distance),
    })
}

/// Apply all tiers in order, return first match
pub fn match_tier(token: &str, candidate: &str, config: &MatcherConfig) -> Option<TierMatch> {
    // 1. Exact match
    if let Some(m) = exact_match(token, candidate, config) {
        return Some(m);
    }

    let pair = Pair::new(token, candidate);

    // 2. Containment match
    if let Some(m) = containment(&pair, config) {
        return Some(m);
    }

    // 3. Edit distance match
    edit(&pair, config)
}

#[inline]
fn contains(haystack: &str, needle: &str) -> bool {
    #[cfg(all(not(target_arch = "wasm32"), feature = "simd"))]
    {
        memchr::memmem::find(haystack.as_bytes(), needle.as_bytes()).is_some()
    }

    #[cfg(any(target_arch = "wasm32", not(feature = "simd")))]
    {
        haystack.contains(needle)
    }
}
