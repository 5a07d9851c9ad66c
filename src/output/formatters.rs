//! Formatting utilities for terminal output

use crate::core::Candidate;
use chrono::NaiveDate;

/// Format the candidate count as `unused/total`
///
/// The unused part is left out when there are no candidates at all.
#[must_use]
pub fn candidate_count(unused: usize, total: usize) -> String {
    if total > 0 {
        format!("{unused}/{total}")
    } else {
        total.to_string()
    }
}

/// Format a score with one decimal place
#[must_use]
pub fn format_score(score: f64) -> String {
    format!("{score:.1}")
}

/// Format the day a candidate was used, if that lies before today
#[must_use]
pub fn used_date(candidate: &Candidate, today: NaiveDate) -> Option<String> {
    candidate
        .past_used_date(today)
        .map(|date| date.format("%a %b %d %Y").to_string())
}

/// Create a score bar string
#[must_use]
pub fn score_bar(score: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((score / 100.0) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
