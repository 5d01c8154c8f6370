//! # Prompt Validation Library
//!
//! The validation and scoring engine behind PromptSentinel. It screens a text
//! prompt against a configurable rule set before the prompt is forwarded to a
//! downstream system, and explains every point it takes off.
//!
//! ## Features
//!
//! - Length bounds, blocked patterns, use-case heuristics and named custom rules
//! - Score accumulation with derived recommendations
//! - Security analysis for injection attempts and sensitive data
//! - GDPR/HIPAA/SOX-style compliance keyword checks
//! - Coarse token and complexity estimates
//!
//! Every call is independent. The only process-wide state is the set of
//! built-in pattern tables, compiled once and never mutated.
//!
//! ```
//! use prompt_validation::prelude::*;
//!
//! let result = validate_prompt("Write a story about a cat", &Config::default()).unwrap();
//! assert!(result.is_valid);
//! assert_eq!(result.score, 100);
//! ```

mod api_key;
mod config;
mod engine;
mod errors;
mod types;
pub mod validators;

pub use api_key::{ApiKey, MINIMUM_API_KEY_LENGTH};
pub use config::{Config, UseCase, DEFAULT_BLOCKED_PATTERNS, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
pub use engine::validate_prompt_comprehensive;
pub use errors::{SentinelResult, ValidationError};
pub use types::{
    ComplianceCheck, ComprehensiveValidationResult, IssueType, PerformanceMetrics, RiskLevel,
    SecurityAnalysis, Severity, ValidationIssue, ValidationResult,
};
pub use validators::{
    analyze_security, check_compliance, estimate_performance, generate_recommendations,
    validate_prompt,
};

/// Re-export commonly used items for convenience
pub mod prelude {
    pub use crate::config::{Config, UseCase};
    pub use crate::engine::validate_prompt_comprehensive;
    pub use crate::errors::{SentinelResult, ValidationError};
    pub use crate::types::*;
    pub use crate::validators::{
        analyze_security, check_compliance, estimate_performance, validate_prompt,
    };
}

/// Version of the validation library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_validation_is_stable() {
        let config = Config::default().with_custom_rule("cats", "cat");
        let prompt = "How do I hack my cat's feeder?";

        let first = validate_prompt(prompt, &config).unwrap();
        let second = validate_prompt(prompt, &config).unwrap();

        assert_eq!(first.issues, second.issues);
        assert_eq!(first.score, second.score);
        assert_eq!(first.recommendations, second.recommendations);
        assert_eq!(first.is_valid, second.is_valid);
    }
}
