//! Token-level fuzzy matching
//!
//! # Pipeline
//!
//! 1. Pick the ruleset from the first input
//! 2. Normalize both inputs (identical results score 100)
//! 3. Segment into tokens
//! 4. Drop stopwords, or keep them if that empties a side
//! 5. Pair each token of the shorter side with the first token of the longer
//!    side that passes a tier (exact, containment, edit distance)
//! 6. Penalize adjacent pairs whose order is inverted
//! 7. Scale the tally by the longer side's length
//!
//! # Example
//!
//! ```rust
//! use tmfuzzy_core::fuzzy::FuzzyMatcher;
//!
//! let matcher = FuzzyMatcher::new();
//! assert_eq!(matcher.score("The cat sat on the mat", "A cat sat on a mat"), 80);
//! assert!(matcher.score("running quickly", "run quick") > 0);
//! ```

mod engine;
mod order;
mod report;
pub mod tiers;

pub use engine::FuzzyMatcher;
pub use order::inverted_pairs;
pub use report::{MatchReport, Outcome, TokenMatch};
pub use tiers::{Tier, TierMatch};
