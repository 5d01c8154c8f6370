//! Recommendations derived from a validation result

use crate::types::ValidationResult;

/// Scores below this suggest a safety review
pub const REVIEW_SCORE_THRESHOLD: i32 = 80;
/// Scores above this are considered clean
pub const GOOD_SCORE_THRESHOLD: i32 = 90;
/// More issues than this suggest splitting the prompt
pub const MANY_ISSUES_THRESHOLD: usize = 3;

pub const REVIEW_RECOMMENDATION: &str = "Consider reviewing flagged content for safety";
pub const BREAK_DOWN_RECOMMENDATION: &str =
    "Multiple issues detected - consider breaking down the prompt";
pub const LOOKS_GOOD_RECOMMENDATION: &str =
    "Prompt looks good! Consider adding more specific instructions for better results";

/// Generate guidance from the score and issue count. Conditions are not exclusive.
pub fn generate_recommendations(result: &ValidationResult) -> Vec<String> {
    let mut recommendations = Vec::new();

    if result.score < REVIEW_SCORE_THRESHOLD {
        recommendations.push(REVIEW_RECOMMENDATION.to_string());
    }

    if result.issues.len() > MANY_ISSUES_THRESHOLD {
        recommendations.push(BREAK_DOWN_RECOMMENDATION.to_string());
    }

    if result.score > GOOD_SCORE_THRESHOLD {
        recommendations.push(LOOKS_GOOD_RECOMMENDATION.to_string());
    }

    recommendations
}
