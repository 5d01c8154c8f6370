//! Validation configuration
//!
//! `Config` is the rule catalog every validator reads from. It is plain data:
//! loading and saving it is the caller's job.

use crate::errors::{SentinelResult, ValidationError};
use crate::validators::utils::compile_pattern;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Default maximum prompt length in bytes
pub const DEFAULT_MAX_LENGTH: usize = 10_000;

/// Default minimum prompt length in bytes
pub const DEFAULT_MIN_LENGTH: usize = 1;

/// Blocked patterns shipped with the default configuration
pub const DEFAULT_BLOCKED_PATTERNS: [&str; 4] = [
    r"(?i)(password|secret|key|token|credential)",
    r"(?i)(inject|exploit|hack|attack)",
    r"(?i)(illegal|unlawful|criminal)",
    r"(?i)(violence|harm|kill|destroy)",
];

/// Use cases with dedicated heuristics
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UseCase {
    General,
    Educational,
    Business,
    Creative,
    /// Any other tag; passes through without extra checks
    Other(String),
}

impl UseCase {
    pub fn as_str(&self) -> &str {
        match self {
            UseCase::General => "general",
            UseCase::Educational => "educational",
            UseCase::Business => "business",
            UseCase::Creative => "creative",
            UseCase::Other(tag) => tag,
        }
    }
}

impl From<&str> for UseCase {
    fn from(tag: &str) -> Self {
        match tag {
            "general" => UseCase::General,
            "educational" => UseCase::Educational,
            "business" => UseCase::Business,
            "creative" => UseCase::Creative,
            other => UseCase::Other(other.to_string()),
        }
    }
}

/// Parameters for prompt validation
///
/// `safety_level`, `allowed_domains` and `require_approval` are carried for
/// existing configuration files but are not consulted by any rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub use_case: String,
    pub safety_level: String,
    #[serde(deserialize_with = "null_as_default")]
    pub allowed_domains: Vec<String>,
    /// Checked in list order
    #[serde(deserialize_with = "null_as_default")]
    pub blocked_patterns: Vec<String>,
    pub max_length: usize,
    pub min_length: usize,
    pub require_approval: bool,
    /// Rule name to pattern, checked in name order
    #[serde(deserialize_with = "null_as_default")]
    pub custom_rules: BTreeMap<String, String>,
    pub last_updated: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            use_case: "general".to_string(),
            safety_level: "medium".to_string(),
            allowed_domains: Vec::new(),
            blocked_patterns: DEFAULT_BLOCKED_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            max_length: DEFAULT_MAX_LENGTH,
            min_length: DEFAULT_MIN_LENGTH,
            require_approval: false,
            custom_rules: BTreeMap::new(),
            last_updated: Utc::now(),
        }
    }
}

impl Config {
    /// Parsed use case tag
    pub fn use_case(&self) -> UseCase {
        UseCase::from(self.use_case.as_str())
    }

    /// Add or replace a named custom rule
    pub fn with_custom_rule<N: Into<String>, P: Into<String>>(mut self, name: N, pattern: P) -> Self {
        self.custom_rules.insert(name.into(), pattern.into());
        self
    }

    /// Set a single configuration value from its textual form
    pub fn set_value(&mut self, key: &str, value: &str) -> SentinelResult<()> {
        match key {
            "use_case" => self.use_case = value.to_string(),
            "safety_level" => self.safety_level = value.to_string(),
            "max_length" => self.max_length = parse_length(key, value)?,
            "min_length" => self.min_length = parse_length(key, value)?,
            "require_approval" => self.require_approval = value.eq_ignore_ascii_case("true"),
            other => return Err(ValidationError::UnknownConfigKey(other.to_string())),
        }
        self.last_updated = Utc::now();
        Ok(())
    }

    /// Configured patterns that fail to compile and will be skipped
    pub fn invalid_patterns(&self) -> Vec<String> {
        self.blocked_patterns
            .iter()
            .chain(self.custom_rules.values())
            .filter(|pattern| compile_pattern(pattern).is_none())
            .cloned()
            .collect()
    }
}

/// Files written by older tools store empty collections as `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn parse_length(key: &str, value: &str) -> SentinelResult<usize> {
    value.trim().parse::<usize>().map_err(|e| {
        ValidationError::InvalidConfigValue(format!("invalid {} value '{}': {}", key, value, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.use_case, "general");
        assert_eq!(config.safety_level, "medium");
        assert_eq!(config.max_length, DEFAULT_MAX_LENGTH);
        assert_eq!(config.min_length, DEFAULT_MIN_LENGTH);
        assert_eq!(config.blocked_patterns.len(), 4);
        assert_eq!(config.blocked_patterns[0], "(?i)(password|secret|key|token|credential)");
        assert!(config.custom_rules.is_empty());
        assert!(!config.require_approval);
    }

    #[test_case("educational", UseCase::Educational)]
    #[test_case("business", UseCase::Business)]
    #[test_case("creative", UseCase::Creative)]
    #[test_case("general", UseCase::General)]
    #[test_case("legal", UseCase::Other("legal".to_string()))]
    #[test_case("Business", UseCase::Other("Business".to_string()))]
    fn test_use_case_parsing(tag: &str, expected: UseCase) {
        assert_eq!(UseCase::from(tag), expected);
        assert_eq!(UseCase::from(tag).as_str(), tag);
    }

    #[test]
    fn test_set_value() {
        let mut config = Config::default();
        config.set_value("use_case", "business").unwrap();
        config.set_value("max_length", "500").unwrap();
        config.set_value("min_length", "5").unwrap();
        config.set_value("require_approval", "TRUE").unwrap();

        assert_eq!(config.use_case(), UseCase::Business);
        assert_eq!(config.max_length, 500);
        assert_eq!(config.min_length, 5);
        assert!(config.require_approval);

        config.set_value("require_approval", "yes").unwrap();
        assert!(!config.require_approval);
    }

    #[test]
    fn test_set_value_errors() {
        let mut config = Config::default();
        assert!(matches!(
            config.set_value("max_length", "lots"),
            Err(ValidationError::InvalidConfigValue(_))
        ));
        assert!(matches!(
            config.set_value("theme", "dark"),
            Err(ValidationError::UnknownConfigKey(_))
        ));
        assert_eq!(config.max_length, DEFAULT_MAX_LENGTH);
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"use_case": "creative", "custom_rules": {"no_cats": "cat"}}"#)
                .unwrap();
        assert_eq!(config.use_case, "creative");
        assert_eq!(config.max_length, DEFAULT_MAX_LENGTH);
        assert_eq!(config.blocked_patterns.len(), 4);
        assert_eq!(config.custom_rules.get("no_cats").map(String::as_str), Some("cat"));
    }

    #[test]
    fn test_null_collections_load_as_empty() {
        let config: Config = serde_json::from_str(
            r#"{
                "use_case": "business",
                "safety_level": "high",
                "allowed_domains": null,
                "blocked_patterns": null,
                "max_length": 2000,
                "min_length": 3,
                "require_approval": true,
                "custom_rules": null,
                "last_updated": "2024-05-01T10:00:00.123456789-04:00"
            }"#,
        )
        .unwrap();

        assert!(config.allowed_domains.is_empty());
        assert!(config.blocked_patterns.is_empty());
        assert!(config.custom_rules.is_empty());
        assert_eq!(config.max_length, 2000);
        assert_eq!(config.last_updated.to_rfc3339(), "2024-05-01T14:00:00.123456789+00:00");
    }

    #[test]
    fn test_invalid_patterns() {
        let mut config = Config::default().with_custom_rule("broken", "(unclosed");
        config.blocked_patterns.push("[z-a]".to_string());

        let invalid = config.invalid_patterns();
        assert_eq!(invalid, vec!["[z-a]".to_string(), "(unclosed".to_string()]);
    }
}
