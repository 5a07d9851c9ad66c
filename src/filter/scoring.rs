//! Heuristic rank scores
//!
//! Scores each candidate by how common its letters are among the candidates
//! that are still possible answers. Two frequency tables are built from the
//! candidates without a past use date:
//!
//! - a presence table: each distinct letter of a word counts once, except
//!   letters already known to be in the word (hinted anywhere, or known at a
//!   position other than the one being looked at)
//! - a positional table per position: every letter counts, with no exclusions
//!
//! Both are normalized by the number of unused candidates and combined with
//! the golden-ratio weight favouring position information. This is a fast
//! heuristic, not an entropy calculation.

use crate::core::letters::ALPHABET_LEN;
use crate::core::{Candidate, ConstraintState, LetterSet, WORD_LEN, Word};
use chrono::NaiveDate;
use tracing::{debug, trace};

/// Weight of the positional term
pub const POSITION_WEIGHT: f64 = 0.618;

/// Weight of the presence term
pub const PRESENCE_WEIGHT: f64 = 1.0 - POSITION_WEIGHT;

/// Factor bringing the per-letter average into a 0-100 range
const SCORE_SCALE: f64 = 100.0;

/// Letter frequency tables over the unused candidates of a pool
#[derive(Debug, Clone)]
pub struct LetterStats {
    presence: [u32; ALPHABET_LEN],
    positional: [[u32; ALPHABET_LEN]; WORD_LEN],
    unused: u32,
}

impl LetterStats {
    /// Count letters over the candidates not used before `today`
    ///
    /// Returns `None` when every candidate has a past use date, since there
    /// is nothing to normalize by.
    #[must_use]
    pub fn collect(
        candidates: &[&Candidate],
        state: &ConstraintState,
        today: NaiveDate,
    ) -> Option<Self> {
        let mut stats = Self {
            presence: [0; ALPHABET_LEN],
            positional: [[0; ALPHABET_LEN]; WORD_LEN],
            unused: 0,
        };

        let hinted = state.hint_letters();
        for candidate in candidates.iter().filter(|c| !c.is_past_used(today)) {
            stats.unused += 1;

            for letter in informative_letters(&candidate.word, state, hinted).iter() {
                stats.presence[letter_index(letter)] += 1;
            }

            for (table, &letter) in stats.positional.iter_mut().zip(candidate.word.chars()) {
                table[letter_index(letter)] += 1;
            }
        }

        if stats.unused == 0 {
            return None;
        }

        trace!(unused = stats.unused, presence = ?stats.presence, "letter statistics");
        Some(stats)
    }

    /// Number of candidates the tables were built from
    #[must_use]
    pub const fn unused(&self) -> u32 {
        self.unused
    }

    /// Score a word, rounded to one decimal place
    #[must_use]
    pub fn score(&self, word: &Word, state: &ConstraintState) -> f64 {
        let denominator = f64::from(self.unused);

        let presence: f64 = informative_letters(word, state, state.hint_letters())
            .iter()
            .map(|letter| PRESENCE_WEIGHT * f64::from(self.presence[letter_index(letter)]))
            .sum::<f64>()
            / denominator;

        let positional: f64 = self
            .positional
            .iter()
            .zip(word.chars())
            .map(|(table, &letter)| POSITION_WEIGHT * f64::from(table[letter_index(letter)]))
            .sum::<f64>()
            / denominator;

        let average = (presence + positional) / WORD_LEN as f64;
        (average * SCORE_SCALE * 10.0).round() / 10.0
    }
}

/// Score every candidate of an already filtered pool
///
/// Returns `None` for all candidates when none of them is unused.
/// Past-used candidates are scored too, against the unused-only tables.
#[must_use]
pub fn assign_scores(
    candidates: &[&Candidate],
    state: &ConstraintState,
    today: NaiveDate,
) -> Vec<Option<f64>> {
    let Some(stats) = LetterStats::collect(candidates, state, today) else {
        debug!(
            candidates = candidates.len(),
            "all candidates already used, skipping scores"
        );
        return vec![None; candidates.len()];
    };

    debug!(
        candidates = candidates.len(),
        unused = stats.unused(),
        "scoring candidates"
    );

    candidates
        .iter()
        .map(|candidate| Some(stats.score(&candidate.word, state)))
        .collect()
}

/// Distinct letters of `word` that would tell the player something new
///
/// A letter is left out if it is hinted anywhere, or if every occurrence of
/// it in the word sits at a position other than where it is already known.
fn informative_letters(word: &Word, state: &ConstraintState, hinted: LetterSet) -> LetterSet {
    word.chars()
        .iter()
        .enumerate()
        .filter(|&(position, &letter)| !is_known_elsewhere(state, position, letter))
        .map(|(_, &letter)| letter)
        .collect::<LetterSet>()
        .difference(hinted)
}

fn is_known_elsewhere(state: &ConstraintState, position: usize, letter: u8) -> bool {
    state
        .known
        .iter()
        .enumerate()
        .any(|(other, known)| other != position && *known == Some(letter))
}

#[inline]
fn letter_index(letter: u8) -> usize {
    LetterSet::index_of(letter).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn candidates(words: &[&str]) -> Vec<Candidate> {
        words
            .iter()
            .map(|w| Candidate::new(Word::new(w).unwrap()))
            .collect()
    }

    fn scores(pool: &[Candidate], state: &ConstraintState) -> Vec<Option<f64>> {
        let refs: Vec<&Candidate> = pool.iter().collect();
        assign_scores(&refs, state, today())
    }

    #[test]
    fn weights_sum_to_one() {
        assert!((POSITION_WEIGHT + PRESENCE_WEIGHT - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn hinted_letters_do_not_score_presence() {
        let pool = candidates(&["adieu", "audio"]);
        let state = ConstraintState::parse("A____", ",,,,D", "").unwrap();
        assert_eq!(scores(&pool, &state), [Some(63.8), Some(63.8)]);
    }

    #[test]
    fn ranks_common_letters_higher() {
        let pool = candidates(&["first", "freed", "fresh", "fried", "fruit"]);
        let state = ConstraintState::parse("F____", ",,,R,", "O").unwrap();
        assert_eq!(
            scores(&pool, &state),
            [Some(45.5), Some(52.4), Some(51.4), Some(54.5), Some(48.9)]
        );
    }

    #[test]
    fn single_candidate_score() {
        let pool = candidates(&["stoic"]);
        let state = ConstraintState::parse("S____", ",,IS,,", "ADEU").unwrap();
        assert_eq!(scores(&pool, &state), [Some(84.7)]);
    }

    #[test]
    fn letter_known_elsewhere_is_not_informative() {
        let word = Word::new("sassy").unwrap();
        let state = ConstraintState::parse("___S_", "", "").unwrap();
        // S also sits at positions 0 and 2, but its only non-excluded
        // occurrence is the known one at position 3
        let letters = informative_letters(&word, &state, LetterSet::EMPTY);
        assert!(letters.contains(b'S'));

        let word = Word::new("stamp").unwrap();
        let letters = informative_letters(&word, &state, LetterSet::EMPTY);
        assert!(!letters.contains(b'S'));
        assert!(letters.contains(b'T'));
    }

    #[test]
    fn all_used_candidates_leave_scores_unset() {
        let used = NaiveDate::from_ymd_opt(2021, 6, 19).unwrap();
        let pool: Vec<Candidate> = candidates(&["cigar", "rebut"])
            .into_iter()
            .map(|c| c.with_used(used))
            .collect();
        assert_eq!(scores(&pool, &ConstraintState::new()), [None, None]);
    }

    #[test]
    fn used_candidates_scored_but_not_counted() {
        let used = NaiveDate::from_ymd_opt(2021, 6, 19).unwrap();
        let pool = vec![
            Candidate::new(Word::new("fresh").unwrap()),
            Candidate::new(Word::new("fruit").unwrap()).with_used(used),
        ];
        let refs: Vec<&Candidate> = pool.iter().collect();
        let state = ConstraintState::new();

        let stats = LetterStats::collect(&refs, &state, today()).unwrap();
        assert_eq!(stats.unused(), 1);

        // FRESH matches itself fully: every term is 1.0
        let result = assign_scores(&refs, &state, today());
        assert_eq!(result[0], Some(100.0));
        // FRUIT shares F and R (both tables) with FRESH only
        let expected = ((PRESENCE_WEIGHT * 2.0 + POSITION_WEIGHT * 2.0) / 5.0 * 1000.0).round() / 10.0;
        assert_eq!(result[1], Some(expected));
    }

    #[test]
    fn empty_pool_has_no_scores() {
        assert!(scores(&[], &ConstraintState::new()).is_empty());
    }
}
