//! Candidate scanning
//!
//! Keeps the candidates that fit the per-position pattern and contain every
//! hinted letter somewhere. Letter counts are not tracked: a hint only
//! requires the letter to appear at least once.

use super::pattern::PositionPattern;
use crate::core::{Candidate, LetterSet};

/// Check a single candidate against the pattern and the required letters
#[inline]
#[must_use]
pub fn is_consistent(candidate: &Candidate, pattern: &PositionPattern, required: LetterSet) -> bool {
    required.is_subset_of(candidate.word.letters()) && pattern.matches(&candidate.word)
}

/// Filter a pool down to the candidates consistent with the clues
///
/// `required` is the union of all hint letters. The pool's order is kept.
pub fn scan<'a>(
    pool: &[&'a Candidate],
    pattern: &PositionPattern,
    required: LetterSet,
) -> Vec<&'a Candidate> {
    if pattern.is_unsatisfiable() {
        return Vec::new();
    }

    pool.iter()
        .copied()
        .filter(|candidate| is_consistent(candidate, pattern, required))
        .collect()
}
