//! Rule families applied to a prompt
//!
//! Each submodule is an independent pass over the same prompt. Only the basic
//! validator accumulates a score; the others report their own findings.

pub mod basic;
pub mod compliance;
pub mod performance;
pub mod recommendations;
pub mod security;

pub use basic::validate_prompt;
pub use compliance::check_compliance;
pub use performance::estimate_performance;
pub use recommendations::generate_recommendations;
pub use security::analyze_security;

/// Utility module for pattern helpers
pub mod utils {
    use regex::{Regex, RegexBuilder};
    use std::time::{Duration, Instant};

    /// Matches slower than this are logged
    const SLOW_MATCH_THRESHOLD_MS: u64 = 100;

    /// Compile a pattern for case-insensitive substring search.
    ///
    /// Returns `None` for patterns that do not compile; callers skip those.
    pub fn compile_pattern(pattern: &str) -> Option<Regex> {
        match RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
        {
            Ok(re) => Some(re),
            Err(e) => {
                log::debug!("Skipping invalid pattern '{}': {}", pattern, e);
                None
            }
        }
    }

    /// Compile a fixed pattern table. Entries are known-good literals.
    pub(crate) fn compile_table(patterns: &[&str]) -> Vec<Regex> {
        patterns
            .iter()
            .filter_map(|pattern| compile_pattern(pattern))
            .collect()
    }

    /// Whether `pattern` matches anywhere in `input`.
    ///
    /// An invalid pattern never matches.
    pub fn pattern_matches(input: &str, pattern: &str) -> bool {
        compile_pattern(pattern)
            .map(|re| timed_match(&re, input))
            .unwrap_or(false)
    }

    /// Run a match, logging when it takes unusually long
    pub fn timed_match(re: &Regex, input: &str) -> bool {
        let start = Instant::now();
        let matched = re.is_match(input);

        if start.elapsed() > Duration::from_millis(SLOW_MATCH_THRESHOLD_MS) {
            log::warn!(
                "Pattern '{}' took {}ms against a {}-byte prompt",
                re.as_str(),
                start.elapsed().as_millis(),
                input.len()
            );
        }

        matched
    }

    /// Case-insensitive substring test for plain keywords
    pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
        haystack.to_lowercase().contains(&needle.to_lowercase())
    }
}
