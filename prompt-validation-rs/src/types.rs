//! Result types produced by the engine
//!
//! All of these are value objects built fresh for every call. Field names are
//! part of the JSON contract consumed by renderers and must stay stable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Family of rule that produced an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    Length,
    Pattern,
    UseCase,
    CustomRule,
}

impl IssueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::Length => "length",
            IssueType::Pattern => "pattern",
            IssueType::UseCase => "use_case",
            IssueType::CustomRule => "custom_rule",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Issue severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected problem with a prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub severity: Severity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Reserved for line-aware rules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Reserved for line-aware rules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl ValidationIssue {
    pub fn new<S: Into<String>>(issue_type: IssueType, severity: Severity, message: S) -> Self {
        Self {
            issue_type,
            severity,
            message: message.into(),
            suggestion: None,
            line: None,
            column: None,
        }
    }

    pub fn with_suggestion<S: Into<String>>(mut self, suggestion: S) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Output of basic validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Starts at 100 and is only ever decremented; may go negative
    pub score: i32,
    /// Issues in detection order
    pub issues: Vec<ValidationIssue>,
    pub recommendations: Vec<String>,
    pub metadata: BTreeMap<String, serde_json::Value>,
    pub timestamp: DateTime<Utc>,
}

impl ValidationResult {
    /// A passing result with a full score and no findings yet
    pub fn new() -> Self {
        Self {
            is_valid: true,
            score: 100,
            issues: Vec::new(),
            recommendations: Vec::new(),
            metadata: BTreeMap::new(),
            timestamp: Utc::now(),
        }
    }

    /// Record an issue and apply its score penalty
    pub(crate) fn push_issue(&mut self, issue: ValidationIssue, penalty: i32) {
        self.issues.push(issue);
        self.score -= penalty;
    }

    /// Issues of one type
    pub fn issues_of(&self, issue_type: IssueType) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(move |issue| issue.issue_type == issue_type)
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordinal summary of security findings
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Raise to `level` if it is higher; never lowers.
    pub fn escalate(&mut self, level: RiskLevel) {
        if level > *self {
            *self = level;
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Injection and sensitive-data findings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecurityAnalysis {
    pub has_injection_attempts: bool,
    pub has_sensitive_data: bool,
    pub risk_level: RiskLevel,
    /// One entry per matching pattern, duplicates included
    pub threats: Vec<String>,
}

/// Regulatory keyword findings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceCheck {
    pub gdpr_compliant: bool,
    pub hipaa_compliant: bool,
    pub sox_compliant: bool,
    pub compliance_issues: Vec<String>,
}

impl Default for ComplianceCheck {
    fn default() -> Self {
        Self {
            gdpr_compliant: true,
            hipaa_compliant: true,
            sox_compliant: true,
            compliance_issues: Vec::new(),
        }
    }
}

impl ComplianceCheck {
    pub fn is_compliant(&self) -> bool {
        self.gdpr_compliant && self.hipaa_compliant && self.sox_compliant
    }
}

/// Cost estimates for forwarding the prompt downstream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub estimated_tokens: usize,
    pub complexity_score: f64,
    /// Elapsed time spent computing these metrics
    #[serde(rename = "processing_time_ms")]
    pub processing_time: u64,
    pub resource_intensive: bool,
}

/// Basic result plus the three independent analyses, side by side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComprehensiveValidationResult {
    #[serde(flatten)]
    pub validation: ValidationResult,
    pub security_analysis: SecurityAnalysis,
    pub compliance_check: ComplianceCheck,
    pub performance_metrics: PerformanceMetrics,
}
