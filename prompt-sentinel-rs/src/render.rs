//! Human-readable and JSON reports

use anyhow::{Context, Result};
use prompt_validation::{ComprehensiveValidationResult, Config, Severity, ValidationResult};

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "❌",
        Severity::Warning => "⚠️",
        Severity::Info => "ℹ️",
    }
}

/// Append one line of report text
fn line<S: AsRef<str>>(out: &mut String, text: S) {
    out.push_str(text.as_ref());
    out.push('\n');
}

fn numbered<I, S>(out: &mut String, items: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for (i, item) in items.into_iter().enumerate() {
        line(out, format!("  {}. {}", i + 1, item.as_ref()));
    }
}

/// Text report for a basic validation result
pub fn render_result(result: &ValidationResult) -> String {
    let mut out = String::new();

    line(&mut out, "\n🔍 Prompt Validation Results");
    line(&mut out, "============================\n");

    let status = if result.is_valid { "✅ PASSED" } else { "❌ FAILED" };
    line(&mut out, format!("Status: {}", status));
    line(&mut out, format!("Score: {}/100\n", result.score));

    if !result.issues.is_empty() {
        line(&mut out, "Issues Found:");
        for (i, issue) in result.issues.iter().enumerate() {
            line(
                &mut out,
                format!(
                    "  {}. {} [{}] {}",
                    i + 1,
                    severity_icon(issue.severity),
                    issue.severity.as_str().to_uppercase(),
                    issue.message
                ),
            );
            if let Some(suggestion) = &issue.suggestion {
                line(&mut out, format!("     💡 Suggestion: {}", suggestion));
            }
        }
        out.push('\n');
    }

    if !result.recommendations.is_empty() {
        line(&mut out, "Recommendations:");
        numbered(&mut out, &result.recommendations);
        out.push('\n');
    }

    if !result.metadata.is_empty() {
        line(&mut out, "Metadata:");
        for (key, value) in &result.metadata {
            let value = match value.as_str() {
                Some(s) => s.to_string(),
                None => value.to_string(),
            };
            line(&mut out, format!("  {}: {}", key, value));
        }
    }

    out
}

/// Text report with the security, compliance and performance sections
pub fn render_detailed(result: &ComprehensiveValidationResult) -> String {
    let mut out = render_result(&result.validation);

    let security = &result.security_analysis;
    line(&mut out, "\n🔒 Security Analysis");
    line(&mut out, "===================");
    line(&mut out, format!("Risk Level: {}", security.risk_level.as_str().to_uppercase()));
    line(&mut out, format!("Injection Attempts: {}", security.has_injection_attempts));
    line(&mut out, format!("Sensitive Data: {}", security.has_sensitive_data));
    if !security.threats.is_empty() {
        line(&mut out, "Threats Detected:");
        numbered(&mut out, &security.threats);
    }

    let compliance = &result.compliance_check;
    line(&mut out, "\n📋 Compliance Check");
    line(&mut out, "==================");
    line(&mut out, format!("GDPR Compliant: {}", compliance.gdpr_compliant));
    line(&mut out, format!("HIPAA Compliant: {}", compliance.hipaa_compliant));
    line(&mut out, format!("SOX Compliant: {}", compliance.sox_compliant));
    if !compliance.compliance_issues.is_empty() {
        line(&mut out, "Compliance Issues:");
        numbered(&mut out, &compliance.compliance_issues);
    }

    let performance = &result.performance_metrics;
    line(&mut out, "\n⚡ Performance Metrics");
    line(&mut out, "=====================");
    line(&mut out, format!("Estimated Tokens: {}", performance.estimated_tokens));
    line(&mut out, format!("Complexity Score: {:.2}", performance.complexity_score));
    line(&mut out, format!("Resource Intensive: {}", performance.resource_intensive));

    out
}

/// Pretty JSON for a comprehensive result
pub fn render_json(result: &ComprehensiveValidationResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("failed to serialize results")
}

/// Text summary of a configuration
pub fn render_config(config: &Config) -> String {
    let mut out = String::new();

    line(&mut out, "\n⚙️  PromptSentinel Configuration");
    line(&mut out, "================================\n");
    line(&mut out, format!("Use Case: {}", config.use_case));
    line(&mut out, format!("Safety Level: {}", config.safety_level));
    line(&mut out, format!("Max Length: {}", config.max_length));
    line(&mut out, format!("Min Length: {}", config.min_length));
    line(&mut out, format!("Require Approval: {}", config.require_approval));

    if !config.allowed_domains.is_empty() {
        line(&mut out, format!("Allowed Domains: {}", config.allowed_domains.join(", ")));
    }
    if !config.blocked_patterns.is_empty() {
        line(
            &mut out,
            format!("Blocked Patterns: {} patterns configured", config.blocked_patterns.len()),
        );
    }
    if !config.custom_rules.is_empty() {
        line(
            &mut out,
            format!("Custom Rules: {} rules configured", config.custom_rules.len()),
        );
    }

    line(
        &mut out,
        format!("Last Updated: {}", config.last_updated.format("%Y-%m-%d %H:%M:%S")),
    );

    out
}
