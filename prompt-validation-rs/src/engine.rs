//! Comprehensive validation
//!
//! Basic validation followed by the security, compliance and performance
//! passes. The passes only share the prompt and config, so their order does
//! not affect the result.

use crate::config::Config;
use crate::errors::SentinelResult;
use crate::types::ComprehensiveValidationResult;
use crate::validators::{analyze_security, check_compliance, estimate_performance, validate_prompt};

/// Validate a prompt and attach security, compliance and performance analysis.
///
/// Fails only if basic validation fails internally; an invalid prompt is a
/// successful validation with `is_valid == false`.
pub fn validate_prompt_comprehensive(
    prompt: &str,
    config: &Config,
) -> SentinelResult<ComprehensiveValidationResult> {
    let validation = validate_prompt(prompt, config)?;

    Ok(ComprehensiveValidationResult {
        validation,
        security_analysis: analyze_security(prompt),
        compliance_check: check_compliance(prompt, config),
        performance_metrics: estimate_performance(prompt),
    })
}
