//! Clue state collected from the player
//!
//! A `ConstraintState` records everything known about the secret word:
//! letters fixed at a position, letters present but excluded from certain
//! positions, and letters absent entirely. It is rebuilt by the caller on
//! every edit and only ever read by the filter.

use super::letters::LetterSet;
use super::word::WORD_LEN;
use thiserror::Error;

/// Known clues about the secret word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConstraintState {
    /// Letter confirmed correct at each position
    pub known: [Option<u8>; WORD_LEN],
    /// Letters confirmed present but not at each position
    pub hints: [LetterSet; WORD_LEN],
    /// Letters confirmed absent from the word
    pub banned: LetterSet,
}

/// Error type for clue text that cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("Known letters must describe exactly 5 positions, got {0}")]
    KnownLength(usize),
    #[error("Hints must describe at most 5 positions, got {0}")]
    TooManyHintSlots(usize),
    #[error("Invalid character '{0}' in clue")]
    InvalidCharacter(char),
}

impl ConstraintState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a full clue description
    ///
    /// - `known`: five characters, a letter or one of `_ . - ?` / space for unknown
    /// - `hints`: up to five comma-separated letter groups, one per position
    /// - `banned`: any string; every letter in it is banned
    ///
    /// # Errors
    /// Returns `ConstraintError` if `known` is not five positions long, if
    /// there are more than five hint groups, or if a position holds something
    /// other than a letter or a placeholder.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::ConstraintState;
    ///
    /// let state = ConstraintState::parse("S____", ",,IS,,", "ADEU").unwrap();
    /// assert_eq!(state.known[0], Some(b'S'));
    /// assert_eq!(state.hints[2].to_string(), "IS");
    /// assert_eq!(state.banned.to_string(), "ADEU");
    /// ```
    pub fn parse(known: &str, hints: &str, banned: &str) -> Result<Self, ConstraintError> {
        let mut state = Self::new();

        if !known.is_empty() {
            let chars: Vec<char> = known.chars().collect();
            if chars.len() != WORD_LEN {
                return Err(ConstraintError::KnownLength(chars.len()));
            }
            for (position, c) in chars.into_iter().enumerate() {
                match c {
                    '_' | '.' | '-' | '?' | ' ' => {}
                    c if c.is_ascii_alphabetic() => {
                        state.known[position] = Some(c.to_ascii_uppercase() as u8);
                    }
                    c => return Err(ConstraintError::InvalidCharacter(c)),
                }
            }
        }

        if !hints.is_empty() {
            let groups: Vec<&str> = hints.split(',').collect();
            if groups.len() > WORD_LEN {
                return Err(ConstraintError::TooManyHintSlots(groups.len()));
            }
            for (position, group) in groups.into_iter().enumerate() {
                if let Some(c) = group.chars().find(|c| !c.is_ascii_alphabetic() && *c != ' ') {
                    return Err(ConstraintError::InvalidCharacter(c));
                }
                state.hints[position] = LetterSet::from_letters(group);
            }
        }

        state.set_banned(banned);
        Ok(state)
    }

    /// Update a known letter the way the input form does
    ///
    /// Only the last letter typed is kept; clearing the text clears the position.
    ///
    /// # Panics
    /// Panics if position >= 5
    pub fn set_known(&mut self, position: usize, text: &str) {
        self.known[position] = text
            .bytes()
            .rev()
            .find(u8::is_ascii_alphabetic)
            .map(|b| b.to_ascii_uppercase());
    }

    /// Replace the hint letters for a position
    ///
    /// # Panics
    /// Panics if position >= 5
    pub fn set_hint(&mut self, position: usize, text: &str) {
        self.hints[position] = LetterSet::from_letters(text);
    }

    /// Replace the banned letters; every letter in `text` is banned
    pub fn set_banned(&mut self, text: &str) {
        self.banned = LetterSet::from_letters(text);
    }

    /// True when nothing at all is known
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.known.iter().all(Option::is_none)
            && self.hints.iter().all(|h| h.is_empty())
            && self.banned.is_empty()
    }

    /// Every letter named in any hint slot
    #[must_use]
    pub fn hint_letters(&self) -> LetterSet {
        self.hints
            .iter()
            .fold(LetterSet::EMPTY, |acc, &h| acc.union(h))
    }

    /// Check whether this state keeps every clue of `previous`
    ///
    /// When it does, every word rejected under `previous` is also rejected
    /// here, so filtering can start from the previous result instead of the
    /// whole dictionary.
    #[must_use]
    pub fn is_at_least_as_restrictive_as(&self, previous: &Self) -> bool {
        let known_kept = self
            .known
            .iter()
            .zip(&previous.known)
            .all(|(now, before)| before.is_none() || now == before);

        let hints_kept = self
            .hints
            .iter()
            .zip(&previous.hints)
            .all(|(now, before)| before.is_subset_of(*now));

        known_kept && hints_kept && previous.banned.is_subset_of(self.banned)
    }
}
