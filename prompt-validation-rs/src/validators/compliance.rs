//! Regulatory keyword checks
//!
//! Three independent triggers (GDPR, HIPAA, SOX). Each one flips its flag and
//! appends a single message at most once per prompt.

use super::utils::{compile_table, contains_ignore_case, timed_match};
use crate::config::Config;
use crate::types::ComplianceCheck;
use lazy_static::lazy_static;
use regex::Regex;

pub const GDPR_ISSUE: &str = "Potential GDPR violation: personal data handling";
pub const HIPAA_ISSUE: &str = "Potential HIPAA violation: health information";
pub const SOX_ISSUE: &str = "Potential SOX violation: financial information";

lazy_static! {
    // Clinical and health-record terminology
    static ref HIPAA_PATTERNS: Vec<Regex> = compile_table(&[
        r"(?i)(patient|medical|health|diagnosis)",
        r"(?i)(phi|protected health information)",
    ]);
}

/// Check a prompt for compliance triggers.
///
/// `config` is accepted for per-tenant overrides; no rule reads it yet.
pub fn check_compliance(prompt: &str, _config: &Config) -> ComplianceCheck {
    let mut check = ComplianceCheck::default();

    if contains_ignore_case(prompt, "personal data") {
        check.gdpr_compliant = false;
        check.compliance_issues.push(GDPR_ISSUE.to_string());
    }

    if HIPAA_PATTERNS.iter().any(|pattern| timed_match(pattern, prompt)) {
        check.hipaa_compliant = false;
        check.compliance_issues.push(HIPAA_ISSUE.to_string());
    }

    if contains_ignore_case(prompt, "financial") {
        check.sox_compliant = false;
        check.compliance_issues.push(SOX_ISSUE.to_string());
    }

    check
}
