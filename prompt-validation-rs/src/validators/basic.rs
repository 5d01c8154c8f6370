//! Basic prompt validation
//!
//! Length bounds, blocked patterns, use-case heuristics and custom rules,
//! applied in that order against a running score that starts at 100.
//! Only length violations make a prompt invalid; every other finding is
//! advisory and only costs points.

use super::recommendations::generate_recommendations;
use super::utils::{compile_pattern, contains_ignore_case, timed_match};
use crate::config::{Config, UseCase};
use crate::errors::SentinelResult;
use crate::types::{IssueType, Severity, ValidationIssue, ValidationResult};
use serde_json::json;
use std::collections::BTreeMap;
use std::time::Instant;

/// Penalty for each violated length bound
pub const LENGTH_PENALTY: i32 = 20;
/// Penalty for each matching blocked pattern
pub const BLOCKED_PATTERN_PENALTY: i32 = 10;
/// Penalty for a use-case warning
pub const USE_CASE_PENALTY: i32 = 5;
/// Penalty for each triggered custom rule
pub const CUSTOM_RULE_PENALTY: i32 = 5;

/// Validate a prompt against the configured rules
pub fn validate_prompt(prompt: &str, config: &Config) -> SentinelResult<ValidationResult> {
    let start = Instant::now();
    let mut result = ValidationResult::new();

    check_length(prompt, config, &mut result);
    check_blocked_patterns(prompt, &config.blocked_patterns, &mut result);
    check_use_case(prompt, &config.use_case(), &mut result)?;
    check_custom_rules(prompt, &config.custom_rules, &mut result)?;

    result.recommendations = generate_recommendations(&result);

    result.metadata.insert(
        "processing_time_ms".to_string(),
        json!(start.elapsed().as_millis() as u64),
    );
    result
        .metadata
        .insert("prompt_length".to_string(), json!(prompt.len()));
    result
        .metadata
        .insert("use_case".to_string(), json!(config.use_case));

    log::trace!(
        "Validated {}-byte prompt: valid={} score={} issues={}",
        prompt.len(),
        result.is_valid,
        result.score,
        result.issues.len()
    );

    Ok(result)
}

/// Both bounds are checked independently
fn check_length(prompt: &str, config: &Config, result: &mut ValidationResult) {
    let length = prompt.len();

    if length < config.min_length {
        result.push_issue(
            ValidationIssue::new(
                IssueType::Length,
                Severity::Error,
                format!("Prompt too short (minimum {} characters)", config.min_length),
            )
            .with_suggestion("Add more content to your prompt"),
            LENGTH_PENALTY,
        );
        result.is_valid = false;
    }

    if length > config.max_length {
        result.push_issue(
            ValidationIssue::new(
                IssueType::Length,
                Severity::Error,
                format!("Prompt too long (maximum {} characters)", config.max_length),
            )
            .with_suggestion("Shorten your prompt"),
            LENGTH_PENALTY,
        );
        result.is_valid = false;
    }
}

fn check_blocked_patterns(prompt: &str, patterns: &[String], result: &mut ValidationResult) {
    for pattern in patterns {
        let Some(re) = compile_pattern(pattern) else {
            continue;
        };

        if timed_match(&re, prompt) {
            result.push_issue(
                ValidationIssue::new(
                    IssueType::Pattern,
                    Severity::Warning,
                    format!("Prompt contains blocked pattern: {}", pattern),
                )
                .with_suggestion("Review and modify the flagged content"),
                BLOCKED_PATTERN_PENALTY,
            );
        }
    }
}

fn check_use_case(
    prompt: &str,
    use_case: &UseCase,
    result: &mut ValidationResult,
) -> SentinelResult<()> {
    match use_case {
        UseCase::Educational => {
            if contains_ignore_case(prompt, "harmful") {
                result.push_issue(
                    ValidationIssue::new(
                        IssueType::UseCase,
                        Severity::Warning,
                        "Educational prompts should avoid potentially harmful content",
                    )
                    .with_suggestion("Reframe the prompt to focus on learning objectives"),
                    USE_CASE_PENALTY,
                );
            }
        }
        UseCase::Business => {
            if contains_ignore_case(prompt, "personal") {
                result.push_issue(
                    ValidationIssue::new(
                        IssueType::UseCase,
                        Severity::Info,
                        "Business prompts should focus on professional objectives",
                    )
                    .with_suggestion("Consider removing personal references"),
                    0,
                );
            }
        }
        UseCase::Creative | UseCase::General | UseCase::Other(_) => {}
    }
    Ok(())
}

fn check_custom_rules(
    prompt: &str,
    rules: &BTreeMap<String, String>,
    result: &mut ValidationResult,
) -> SentinelResult<()> {
    for (name, pattern) in rules {
        let Some(re) = compile_pattern(pattern) else {
            continue;
        };

        if timed_match(&re, prompt) {
            result.push_issue(
                ValidationIssue::new(
                    IssueType::CustomRule,
                    Severity::Warning,
                    format!("Custom rule '{}' triggered", name),
                )
                .with_suggestion("Review the custom rule configuration"),
                CUSTOM_RULE_PENALTY,
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn bare_config() -> Config {
        Config {
            blocked_patterns: Vec::new(),
            ..Config::default()
        }
    }

    #[test]
    fn test_too_short() {
        let config = Config {
            min_length: 10,
            ..Config::default()
        };
        let result = validate_prompt("Hi", &config).unwrap();

        assert!(!result.is_valid);
        assert_eq!(result.score, 80);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].issue_type, IssueType::Length);
        assert_eq!(result.issues[0].severity, Severity::Error);
        assert_eq!(result.issues[0].message, "Prompt too short (minimum 10 characters)");
    }

    #[test]
    fn test_too_long() {
        let config = Config {
            max_length: 5,
            ..bare_config()
        };
        let result = validate_prompt("far too long", &config).unwrap();

        assert!(!result.is_valid);
        assert_eq!(result.score, 80);
        assert_eq!(result.issues[0].message, "Prompt too long (maximum 5 characters)");
    }

    #[test]
    fn test_contradictory_bounds_fire_both() {
        let config = Config {
            min_length: 20,
            max_length: 5,
            ..bare_config()
        };
        let result = validate_prompt("ten chars!", &config).unwrap();

        assert!(!result.is_valid);
        assert_eq!(result.score, 60);
        assert_eq!(result.issues_of(IssueType::Length).count(), 2);
    }

    #[test]
    fn test_length_is_measured_in_bytes() {
        let config = Config {
            max_length: 4,
            ..bare_config()
        };
        // two characters, six bytes
        let result = validate_prompt("日本", &config).unwrap();
        assert!(!result.is_valid);
        assert_eq!(result.metadata["prompt_length"], 6);
    }

    #[test]
    fn test_blocked_patterns_are_advisory() {
        let result = validate_prompt("How do I hack a password?", &Config::default()).unwrap();

        assert!(result.is_valid);
        assert_eq!(result.score, 80);
        assert_eq!(result.issues.len(), 2);
        assert!(result.issues.iter().all(|i| i.issue_type == IssueType::Pattern));
        assert_eq!(
            result.issues[0].message,
            "Prompt contains blocked pattern: (?i)(password|secret|key|token|credential)"
        );
        assert_eq!(
            result.issues[1].message,
            "Prompt contains blocked pattern: (?i)(inject|exploit|hack|attack)"
        );
    }

    #[test]
    fn test_configured_patterns_ignore_case() {
        let config = Config {
            blocked_patterns: vec!["forbidden".to_string()],
            ..Config::default()
        };
        let result = validate_prompt("This is FORBIDDEN", &config).unwrap();
        assert_eq!(result.score, 90);
    }

    #[test]
    fn test_invalid_patterns_are_skipped() {
        let config = Config {
            blocked_patterns: vec!["(unclosed".to_string(), "cat".to_string()],
            ..Config::default()
        }
        .with_custom_rule("broken", "[z-a]")
        .with_custom_rule("dogs", "dog");

        let result = validate_prompt("a cat and a dog", &config).unwrap();

        assert_eq!(result.issues.len(), 2);
        assert_eq!(result.score, 85);
        assert_eq!(result.issues[1].message, "Custom rule 'dogs' triggered");
    }

    #[test_case("educational", "Explain why smoking is harmful", 95, Some(Severity::Warning); "educational harmful")]
    #[test_case("educational", "Explain photosynthesis", 100, None; "educational clean")]
    #[test_case("business", "Draft a personal note to the team", 100, Some(Severity::Info); "business personal")]
    #[test_case("creative", "Something harmful and personal", 100, None; "creative unrestricted")]
    #[test_case("legal", "Something harmful and personal", 100, None; "unknown use case")]
    fn test_use_case_heuristics(
        use_case: &str,
        prompt: &str,
        score: i32,
        severity: Option<Severity>,
    ) {
        let config = Config {
            use_case: use_case.to_string(),
            ..bare_config()
        };
        let result = validate_prompt(prompt, &config).unwrap();

        assert!(result.is_valid);
        assert_eq!(result.score, score);
        let found: Vec<_> = result.issues_of(IssueType::UseCase).collect();
        assert_eq!(found.first().map(|i| i.severity), severity);
        assert_eq!(result.metadata["use_case"], use_case);
    }

    #[test]
    fn test_long_repetition_rule_fires() {
        let config = bare_config().with_custom_rule("long_word", r"\w{30}");
        let result = validate_prompt(&"a".repeat(35), &config).unwrap();

        assert_eq!(result.issues_of(IssueType::CustomRule).count(), 1);
        assert_eq!(result.score, 95);
        assert!(config.invalid_patterns().is_empty());
    }

    #[test]
    fn test_custom_rules_run_in_name_order() {
        let config = bare_config()
            .with_custom_rule("zebra", "stripes")
            .with_custom_rule("alpha", "stripes");
        let result = validate_prompt("stripes everywhere", &config).unwrap();

        let messages: Vec<_> = result.issues.iter().map(|i| i.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["Custom rule 'alpha' triggered", "Custom rule 'zebra' triggered"]
        );
        assert_eq!(result.score, 90);
    }

    #[test]
    fn test_issue_order_follows_rule_order() {
        let config = Config {
            min_length: 100,
            use_case: "educational".to_string(),
            ..Config::default()
        }
        .with_custom_rule("kw", "harmful");
        let result = validate_prompt("harmful attack", &config).unwrap();

        let kinds: Vec<_> = result.issues.iter().map(|i| i.issue_type).collect();
        assert_eq!(
            kinds,
            vec![
                IssueType::Length,
                IssueType::Pattern,
                IssueType::Pattern,
                IssueType::UseCase,
                IssueType::CustomRule,
            ]
        );
        assert_eq!(result.score, 100 - 20 - 10 - 10 - 5 - 5);
    }

    #[test]
    fn test_score_can_go_negative() {
        let config = Config {
            blocked_patterns: vec!["a".to_string(); 12],
            ..Config::default()
        };
        let result = validate_prompt("a", &config).unwrap();
        assert_eq!(result.score, -20);
        assert!(result.is_valid);
    }

    #[test]
    fn test_metadata() {
        let result = validate_prompt("Write a story", &Config::default()).unwrap();
        assert_eq!(result.metadata["prompt_length"], 13);
        assert_eq!(result.metadata["use_case"], "general");
        assert!(result.metadata["processing_time_ms"].is_u64());
    }
}
