//! API key handling
//!
//! Normalized API keys that can be compared without leaking timing
//! information and shown without leaking the secret.

use crate::errors::{SentinelResult, ValidationError};
use std::fmt;
use subtle::ConstantTimeEq;

/// Shortest accepted API key, in bytes
pub const MINIMUM_API_KEY_LENGTH: usize = 16;

/// Characters shown by the `Debug` representation
const DEBUG_PREFIX_LENGTH: usize = 4;

/// A validated, whitespace-trimmed API key
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    value: String,
}

impl ApiKey {
    /// Validate and normalize a raw key
    pub fn new(raw: &str) -> SentinelResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidApiKey(
                "api key cannot be empty".to_string(),
            ));
        }
        if trimmed.len() < MINIMUM_API_KEY_LENGTH {
            return Err(ValidationError::InvalidApiKey(format!(
                "api key must be at least {} characters",
                MINIMUM_API_KEY_LENGTH
            )));
        }

        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// First `length` characters, safe to log. The whole key if it is shorter.
    pub fn prefix(&self, length: usize) -> &str {
        match self.value.char_indices().nth(length) {
            Some((end, _)) => &self.value[..end],
            None => &self.value,
        }
    }

    /// Compare against a candidate in constant time.
    ///
    /// Length is not secret; contents are compared without early exit.
    pub fn matches(&self, candidate: &str) -> bool {
        let expected = self.value.as_bytes();
        let candidate = candidate.trim().as_bytes();
        if expected.len() != candidate.len() {
            return false;
        }
        expected.ct_eq(candidate).into()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({}…)", self.prefix(DEBUG_PREFIX_LENGTH))
    }
}
