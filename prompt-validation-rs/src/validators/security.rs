//! Security analysis
//!
//! Looks for injection-style content and sensitive-data markers. Each
//! matching pattern records one threat, so a prompt that trips several
//! patterns of the same family reports the threat several times.

use super::utils::{compile_table, timed_match};
use crate::types::{RiskLevel, SecurityAnalysis};
use lazy_static::lazy_static;
use regex::Regex;

pub const INJECTION_THREAT: &str = "Potential injection attempt";
pub const SENSITIVE_DATA_THREAT: &str = "Potential sensitive data exposure";

lazy_static! {
    // SQL keywords, script/markup injection, shell/eval execution
    static ref INJECTION_PATTERNS: Vec<Regex> = compile_table(&[
        r"(?i)(union|select|insert|update|delete|drop)",
        r"(?i)(<script|javascript:|onload=)",
        r"(?i)(exec|eval|system|shell)",
    ]);

    // Identity, financial and credential markers
    static ref SENSITIVE_PATTERNS: Vec<Regex> = compile_table(&[
        r"(?i)(ssn|social security)",
        r"(?i)(credit card|card number)",
        r"(?i)(password|passwd)",
        r"(?i)(api key|secret key)",
    ]);
}

/// Analyze a prompt for injection attempts and sensitive data
pub fn analyze_security(prompt: &str) -> SecurityAnalysis {
    let mut analysis = SecurityAnalysis::default();

    for pattern in INJECTION_PATTERNS.iter() {
        if timed_match(pattern, prompt) {
            analysis.has_injection_attempts = true;
            analysis.threats.push(INJECTION_THREAT.to_string());
            analysis.risk_level.escalate(RiskLevel::High);
        }
    }

    for pattern in SENSITIVE_PATTERNS.iter() {
        if timed_match(pattern, prompt) {
            analysis.has_sensitive_data = true;
            analysis.threats.push(SENSITIVE_DATA_THREAT.to_string());
            analysis.risk_level.escalate(RiskLevel::Medium);
        }
    }

    analysis
}
