//! Performance estimation
//!
//! Coarse cost estimates based on word, line and sentence counts. This is not
//! a tokenizer.

use crate::types::PerformanceMetrics;
use std::time::Instant;

/// Estimated tokens per whitespace-delimited word
pub const TOKENS_PER_WORD: f64 = 1.3;
/// Prompts longer than this (in bytes) are resource intensive
pub const RESOURCE_INTENSIVE_LENGTH: usize = 5_000;
/// Prompts estimated above this many tokens are resource intensive
pub const RESOURCE_INTENSIVE_TOKENS: usize = 2_000;

const WORD_WEIGHT: f64 = 0.01;
const LINE_WEIGHT: f64 = 0.1;
const SENTENCE_WEIGHT: f64 = 0.05;

/// Estimate token count, complexity and resource usage for a prompt
pub fn estimate_performance(prompt: &str) -> PerformanceMetrics {
    let start = Instant::now();

    let word_count = prompt.split_whitespace().count();
    // Naive splits: a delimiter-free prompt counts as one line and one sentence.
    let line_count = prompt.split('\n').count();
    let sentence_count = prompt.split('.').count();

    let estimated_tokens = (word_count as f64 * TOKENS_PER_WORD) as usize;
    let complexity_score = word_count as f64 * WORD_WEIGHT
        + line_count as f64 * LINE_WEIGHT
        + sentence_count as f64 * SENTENCE_WEIGHT;

    let resource_intensive =
        prompt.len() > RESOURCE_INTENSIVE_LENGTH || estimated_tokens > RESOURCE_INTENSIVE_TOKENS;

    PerformanceMetrics {
        estimated_tokens,
        complexity_score,
        processing_time: start.elapsed().as_millis() as u64,
        resource_intensive,
    }
}
