//! Fixed-size letter sets
//!
//! A `LetterSet` is a 26-bit mask over the uppercase ASCII alphabet, where bit
//! `i` stands for the letter `b'A' + i`. Every per-position alphabet and every
//! "letters present" summary in the crate is one of these.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// A set of uppercase ASCII letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// All 26 letters
    pub const ALPHABET: Self = Self((1 << ALPHABET_LEN) - 1);

    /// Index (0-25) of an ASCII letter, case-insensitive
    ///
    /// Returns `None` for anything that is not an ASCII letter.
    #[inline]
    #[must_use]
    pub const fn index_of(letter: u8) -> Option<usize> {
        match letter {
            b'A'..=b'Z' => Some((letter - b'A') as usize),
            b'a'..=b'z' => Some((letter - b'a') as usize),
            _ => None,
        }
    }

    /// Uppercase letter for an index (0-25)
    ///
    /// # Panics
    /// Panics in debug mode if `index >= 26`
    #[inline]
    #[must_use]
    pub const fn letter_at(index: usize) -> u8 {
        debug_assert!(index < ALPHABET_LEN, "Letter index must be < 26");
        b'A' + index as u8
    }

    /// Set holding exactly one letter (empty if `letter` is not a letter)
    #[inline]
    #[must_use]
    pub const fn single(letter: u8) -> Self {
        match Self::index_of(letter) {
            Some(i) => Self(1 << i),
            None => Self::EMPTY,
        }
    }

    /// Collect the ASCII letters of a string, ignoring anything else
    #[must_use]
    pub fn from_letters(text: &str) -> Self {
        text.bytes().fold(Self::EMPTY, |set, b| set.with(b))
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        match Self::index_of(letter) {
            Some(i) => self.0 & (1 << i) != 0,
            None => false,
        }
    }

    /// Copy of this set with `letter` added
    #[inline]
    #[must_use]
    pub const fn with(self, letter: u8) -> Self {
        Self(self.0 | Self::single(letter).0)
    }

    /// Copy of this set with `letter` removed
    #[inline]
    #[must_use]
    pub const fn without(self, letter: u8) -> Self {
        Self(self.0 & !Self::single(letter).0)
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_subset_of(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate over the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_LEN)
            .filter(move |&i| self.0 & (1 << i) != 0)
            .map(Self::letter_at)
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_all_letters() {
        assert_eq!(LetterSet::ALPHABET.len(), 26);
        assert!(LetterSet::ALPHABET.contains(b'A'));
        assert!(LetterSet::ALPHABET.contains(b'Z'));
        assert_eq!(
            LetterSet::ALPHABET.to_string(),
            "ABCDEFGHIJKLMNOPQRSTUVWXYZ"
        );
    }

    #[test]
    fn non_letters_are_ignored() {
        assert!(LetterSet::single(b'3').is_empty());
        assert!(!LetterSet::ALPHABET.contains(b' '));
        assert_eq!(LetterSet::from_letters("a-b !"), LetterSet::from_letters("AB"));
        assert_eq!(LetterSet::from_letters("c 3d?").to_string(), "CD");
    }

    #[test]
    fn with_and_without() {
        let set = LetterSet::EMPTY.with(b'S').with(b'i');
        assert_eq!(set.to_string(), "IS");
        assert_eq!(set.without(b'I').to_string(), "S");
        assert_eq!(set.without(b'Q'), set);
    }

    #[test]
    fn removing_last_letter_empties_set() {
        let set = LetterSet::single(b'A').without(b'A');
        assert!(set.is_empty());
    }

    #[test]
    fn subset_and_difference() {
        let small = LetterSet::from_letters("AD");
        let large = LetterSet::from_letters("ADEU");
        assert!(small.is_subset_of(large));
        assert!(!large.is_subset_of(small));
        assert_eq!(large.difference(small).to_string(), "EU");
        assert_eq!(small.union(LetterSet::single(b'Z')).to_string(), "ADZ");
    }

    #[test]
    fn len_counts_distinct_letters() {
        assert_eq!(LetterSet::EMPTY.len(), 0);
        assert_eq!(LetterSet::from_letters("FREED").len(), 4);
        assert_eq!(LetterSet::from_letters("FUZZY").len(), 4);
    }

    #[test]
    fn iter_is_alphabetical() {
        let set: LetterSet = b"ZEBRA".iter().copied().collect();
        let letters: Vec<u8> = set.iter().collect();
        assert_eq!(letters, b"ABERZ");
    }
}
