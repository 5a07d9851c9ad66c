//! Per-position allowed-letter sets
//!
//! Turns a `ConstraintState` into the letters still allowed at each of the
//! five positions. Starts from the full alphabet everywhere, then:
//! 1. collapses each position with a known letter to exactly that letter
//! 2. removes every banned letter from every position
//! 3. removes each position's hint letters from that position
//!
//! Steps 2 and 3 only remove letters, so a known letter that is also banned
//! or hinted at its own position leaves that position empty. That describes
//! contradictory clues and simply matches nothing.

use crate::core::{ConstraintState, LetterSet, WORD_LEN, Word};
use std::fmt;

/// Letters allowed at each position of the secret word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionPattern([LetterSet; WORD_LEN]);

impl PositionPattern {
    /// Build the pattern for a clue state
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::ConstraintState;
    /// use wordle_helper::filter::PositionPattern;
    ///
    /// let state = ConstraintState::parse("A____", ",,,,D", "").unwrap();
    /// let pattern = PositionPattern::build(&state);
    /// assert_eq!(pattern.allowed(0).to_string(), "A");
    /// assert!(!pattern.allowed(4).contains(b'D'));
    /// ```
    #[must_use]
    pub fn build(state: &ConstraintState) -> Self {
        let mut options = [LetterSet::ALPHABET; WORD_LEN];

        for (option, known) in options.iter_mut().zip(&state.known) {
            if let Some(letter) = *known {
                *option = LetterSet::single(letter);
            }
        }

        for option in &mut options {
            *option = option.difference(state.banned);
        }

        for (option, &hint) in options.iter_mut().zip(&state.hints) {
            *option = option.difference(hint);
        }

        Self(options)
    }

    /// Letters allowed at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn allowed(&self, position: usize) -> LetterSet {
        self.0[position]
    }

    /// True if some position allows no letter at all
    #[must_use]
    pub fn is_unsatisfiable(&self) -> bool {
        self.0.iter().any(|set| set.is_empty())
    }

    /// Check every letter of `word` against its position's allowed set
    #[inline]
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.0
            .iter()
            .zip(word.chars())
            .all(|(allowed, &letter)| allowed.contains(letter))
    }
}

impl fmt::Display for PositionPattern {
    /// Regex-like rendering, one bracket group per position
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("^")?;
        for set in &self.0 {
            write!(f, "[{set}]")?;
        }
        f.write_str("$")
    }
}
