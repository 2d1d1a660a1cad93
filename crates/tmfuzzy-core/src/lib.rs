//! tmfuzzy core
//!
//! Fuzzy similarity between two short English or Japanese segments, scored
//! 0 to 100, tolerant of spelling variants, inflection and word order. Meant
//! as a comparison primitive for translation-memory lookups.
//!
//! # Features
//!
//! - `simd` - SIMD-accelerated substring search via memchr
//!
//! # Example
//!
//! ```rust
//! use tmfuzzy_core::{fuzzy_match, FuzzyMatcher, Outcome};
//!
//! assert_eq!(fuzzy_match("", ""), 100);
//! assert_eq!(fuzzy_match("a b c", "a b c d e f g h i j"), 0);
//!
//! let report = FuzzyMatcher::new().explain("color", "colour");
//! assert_eq!(report.outcome, Outcome::Scored);
//! ```

pub mod config;
pub mod distance;
pub mod error;
pub mod fuzzy;
pub mod language;
pub mod normalize;
pub mod segment;
pub mod stopwords;

// Re-export main types at crate root
pub use config::MatcherConfig;
pub use distance::edit_distance;
pub use error::{ConfigError, Result};
pub use fuzzy::{FuzzyMatcher, MatchReport, Outcome, Tier, TokenMatch};
pub use language::Language;
pub use normalize::normalize;
pub use segment::{tokenize, ScriptSegmenter, Segmenter, WhitespaceSegmenter};

/// Score two segments with the default matcher (0 to 100)
pub fn fuzzy_match(s1: &str, s2: &str) -> u8 {
    FuzzyMatcher::new().score(s1, s2)
}
