//! FuzzyMatcher - the comparison pipeline

use tracing::{debug, trace};

use super::order::inverted_pairs;
use super::report::{MatchReport, Outcome, TokenMatch};
use super::tiers::{self, Tier};
use crate::normalize::normalize;
use crate::segment::{tokenize, ScriptSegmenter, Segmenter};
use crate::{stopwords, Language, MatcherConfig};

/// Scores two short strings from 0 (unrelated) to 100 (identical).
///
/// The matcher holds no per-call state, so one instance can be shared across
/// threads as long as its segmenter can.
#[derive(Debug, Clone, Default)]
pub struct FuzzyMatcher<S: Segmenter = ScriptSegmenter> {
    config: MatcherConfig,
    segmenter: S,
}

impl FuzzyMatcher {
    /// Create a matcher with default weights and the script segmenter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom weights.
    ///
    /// Weights are not checked here; build the config through
    /// [`MatcherConfig::from_json`] or call [`MatcherConfig::validate`] first.
    /// NaN weights score 0.
    pub fn with_config(config: MatcherConfig) -> Self {
        Self::with_segmenter(config, ScriptSegmenter)
    }
}

impl<S: Segmenter> FuzzyMatcher<S> {
    /// Create with custom weights and a custom segmenter
    pub fn with_segmenter(config: MatcherConfig, segmenter: S) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid matcher config: {:?}", config);
        Self { config, segmenter }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Similarity score in 0..=100
    pub fn score(&self, s1: &str, s2: &str) -> u8 {
        self.explain(s1, s2).score
    }

    /// Run the full pipeline and report every step that affected the score
    pub fn explain(&self, s1: &str, s2: &str) -> MatchReport {
        let language = Language::detect(s1);
        let s1 = normalize(s1, language);
        let s2 = normalize(s2, language);

        if s1 == s2 {
            debug!(%language, "normalized inputs identical");
            return MatchReport::short_circuit(language, Outcome::Identical, 100);
        }

        let s1_tokens = tokenize(&self.segmenter, &s1);
        let s2_tokens = tokenize(&self.segmenter, &s2);

        let (longer, shorter) = by_length(&s1_tokens, &s2_tokens);
        if longer.len() - shorter.len() > shorter.len() {
            debug!(
                shorter = shorter.len(),
                longer = longer.len(),
                "token counts too far apart"
            );
            return MatchReport::short_circuit(language, Outcome::LengthMismatch, 0);
        }

        let (shorter, longer, stopwords_removed) =
            remove_stopwords(shorter, longer, &s1_tokens, &s2_tokens, language);

        let mut tally = 0.0_f64;
        let mut matches = Vec::new();
        let mut dropped = Vec::new();
        let mut kept = Vec::with_capacity(shorter.len());

        for token in shorter {
            // First candidate satisfying any tier wins, not the best one
            let hit = longer.iter().find_map(|candidate| {
                tiers::match_tier(&token, candidate, &self.config).map(|m| (candidate, m))
            });

            match hit {
                Some((candidate, m)) => {
                    tally += m.credit;
                    tally -= m.penalty;
                    trace!(
                        token = %token,
                        candidate = %candidate,
                        tier = %m.tier,
                        credit = m.net(),
                        "token matched"
                    );
                    matches.push(TokenMatch {
                        token: token.clone(),
                        candidate: candidate.clone(),
                        tier: m.tier,
                        distance: m.distance,
                        credit: m.net(),
                    });
                    // Rewrite variants to the candidate so the order check can find them
                    kept.push(match m.tier {
                        Tier::Exact => token,
                        Tier::Containment | Tier::EditDistance => candidate.clone(),
                    });
                }
                None => {
                    trace!(token = %token, "token unmatched, dropped");
                    dropped.push(token);
                }
            }
        }

        if kept.is_empty() {
            debug!(dropped = dropped.len(), "no tokens matched");
            let mut report = MatchReport::short_circuit(language, Outcome::NoTokensMatched, 0);
            report.stopwords_removed = stopwords_removed;
            report.longer = longer;
            report.dropped = dropped;
            return report;
        }

        let inversions = inverted_pairs(&kept, &longer);
        for &i in &inversions {
            trace!(previous = %kept[i - 1], current = %kept[i], "order inverted");
            tally -= self.config.order_penalty;
        }

        let raw_score = finalize(tally, longer.len());
        let score = raw_score.clamp(0, 100) as u8;
        debug!(%language, tally, raw_score, score, "comparison scored");

        MatchReport {
            language,
            outcome: Outcome::Scored,
            stopwords_removed,
            shorter: kept,
            longer,
            matches,
            dropped,
            inversions: inversions.len(),
            tally,
            raw_score,
            score,
        }
    }
}

/// Order two sequences as (longer, shorter). The first wins ties.
fn by_length<'a>(a: &'a [String], b: &'a [String]) -> (&'a [String], &'a [String]) {
    if a.len() < b.len() {
        (b, a)
    } else {
        (a, b)
    }
}

/// Filter stopwords from both sides, falling back to the unfiltered token
/// sequences for both if either side ends up empty.
///
/// Returns (shorter, longer, whether filtering was kept).
fn remove_stopwords(
    shorter: &[String],
    longer: &[String],
    s1_tokens: &[String],
    s2_tokens: &[String],
    language: Language,
) -> (Vec<String>, Vec<String>, bool) {
    let mut shorter = stopwords::filter(shorter, language);
    let mut longer = stopwords::filter(longer, language);
    if longer.len() < shorter.len() {
        std::mem::swap(&mut shorter, &mut longer);
    }

    if shorter.is_empty() || longer.is_empty() {
        debug!("stopword filtering emptied a side, using unfiltered tokens");
        let (longer, shorter) = by_length(s1_tokens, s2_tokens);
        return (shorter.to_vec(), longer.to_vec(), false);
    }

    (shorter, longer, true)
}

fn finalize(tally: f64, longer_len: usize) -> i64 {
    if longer_len == 0 {
        return 0;
    }
    (tally / longer_len as f64 * 100.0).floor() as i64
}
