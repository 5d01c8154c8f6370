//! Error handling for the validation engine
//!
//! Validation itself almost never fails: a prompt that breaks the rules is
//! still a successfully validated prompt, reported through its issues. The
//! errors here cover the few paths that can genuinely go wrong.

use thiserror::Error;

/// Result type for engine operations
pub type SentinelResult<T> = Result<T, ValidationError>;

/// Enum representing the error kinds surfaced by the engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Unexpected failure inside a rule while validating a prompt
    #[error("Internal validation error: {0}")]
    Internal(String),

    /// Configuration key that cannot be set
    #[error("unknown configuration key: {0}")]
    UnknownConfigKey(String),

    /// Configuration value that cannot be parsed for its key
    #[error("invalid configuration value: {0}")]
    InvalidConfigValue(String),

    /// API key that does not satisfy the key constraints
    #[error("{0}")]
    InvalidApiKey(String),

    /// Generic engine error
    #[error("{0}")]
    Generic(String),
}

impl ValidationError {
    /// Create a new generic error with a message
    pub fn new<S: Into<String>>(message: S) -> Self {
        ValidationError::Generic(message.into())
    }

    /// Create an internal error with a message
    pub fn internal<S: Into<String>>(message: S) -> Self {
        ValidationError::Internal(message.into())
    }

    /// Returns true if this error comes from the configuration layer
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ValidationError::UnknownConfigKey(_) | ValidationError::InvalidConfigValue(_)
        )
    }
}
