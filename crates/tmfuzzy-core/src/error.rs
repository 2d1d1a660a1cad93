//! Error types

use thiserror::Error;

/// Errors raised while loading or validating a [`MatcherConfig`](crate::MatcherConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration text is not valid JSON for the config schema
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A weight or threshold is out of range
    #[error("invalid value for '{field}': {value}")]
    InvalidValue { field: &'static str, value: f64 },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
