//! Result ordering
//!
//! Orders filtered candidates deterministically:
//! 1. candidates used as an answer before today go last
//! 2. higher score first, when both sides carry differing scores
//! 3. alphabetical by word

use super::engine::ScoredCandidate;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Compare two scored candidates for display order
#[must_use]
pub fn compare(a: &ScoredCandidate<'_>, b: &ScoredCandidate<'_>, today: NaiveDate) -> Ordering {
    let a_used = a.candidate.is_past_used(today);
    let b_used = b.candidate.is_past_used(today);

    a_used
        .cmp(&b_used)
        .then_with(|| match (a.score, b.score) {
            (Some(a_score), Some(b_score)) => b_score.total_cmp(&a_score),
            _ => Ordering::Equal,
        })
        .then_with(|| a.candidate.word.text().cmp(b.candidate.word.text()))
}

/// Sort scored candidates in place
pub fn sort_candidates(candidates: &mut [ScoredCandidate<'_>], today: NaiveDate) {
    candidates.sort_by(|a, b| compare(a, b, today));
}
