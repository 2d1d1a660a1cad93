//! Matcher configuration
//!
//! Defaults reproduce the reference weights exactly. Overriding them produces
//! a different heuristic, not a tuned version of the same one.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Tier weights, thresholds and penalties used by [`FuzzyMatcher`](crate::FuzzyMatcher)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Credit for an exact token match
    pub exact_credit: f64,
    /// Credit for a substring containment match
    pub containment_credit: f64,
    /// Both tokens must be at least this many characters for containment
    pub containment_min_len: usize,
    /// Credit for an edit-distance match, before the per-edit penalty
    pub edit_credit: f64,
    /// Subtracted once per edit on an edit-distance match
    pub edit_penalty: f64,
    /// Largest accepted edit distance (inclusive)
    pub max_edit_distance: usize,
    /// Both tokens must be at least this many characters for edit distance
    pub edit_min_len: usize,
    /// Subtracted per inverted adjacent pair
    pub order_penalty: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            exact_credit: 1.0,
            containment_credit: 0.85,
            containment_min_len: 2,
            edit_credit: 1.0,
            edit_penalty: 0.3,
            max_edit_distance: 2,
            edit_min_len: 3,
            order_penalty: 0.2,
        }
    }
}

impl MatcherConfig {
    /// Parse a JSON document and validate it. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject negative or non-finite weights
    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("exact_credit", self.exact_credit),
            ("containment_credit", self.containment_credit),
            ("edit_credit", self.edit_credit),
            ("edit_penalty", self.edit_penalty),
            ("order_penalty", self.order_penalty),
        ];
        for (field, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_are_valid() {
        assert!(MatcherConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = MatcherConfig::from_json(r#"{"order_penalty": 0.5}"#).unwrap();
        assert_eq!(
            config,
            MatcherConfig {
                order_penalty: 0.5,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = MatcherConfig::from_json(r#"{"edit_penalty": -1.0}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "edit_penalty",
                ..
            }
        ));
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        let config = MatcherConfig {
            exact_credit: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = MatcherConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }
}
