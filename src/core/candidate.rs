//! Dictionary entries
//!
//! A `Candidate` is one word the secret answer could be, together with the
//! day it was used as an answer (if it has been) and where the entry came from.

use super::word::Word;
use chrono::NaiveDate;

/// One dictionary entry eligible to be the secret word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub word: Word,
    /// Calendar day (local time) on which the word was the answer
    pub used: Option<NaiveDate>,
    /// Where the entry came from
    pub sources: Vec<String>,
}

impl Candidate {
    #[must_use]
    pub const fn new(word: Word) -> Self {
        Self {
            word,
            used: None,
            sources: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_used(mut self, used: NaiveDate) -> Self {
        self.used = Some(used);
        self
    }

    #[must_use]
    pub fn with_sources(mut self, sources: Vec<String>) -> Self {
        self.sources = sources;
        self
    }

    /// True if the word was already an answer on a day before `today`
    ///
    /// A use date of today or later does not count: today's answer is still
    /// the one being searched for.
    #[inline]
    #[must_use]
    pub fn is_past_used(&self, today: NaiveDate) -> bool {
        self.used.is_some_and(|used| used < today)
    }

    /// Use date to show to the player, only if it lies before `today`
    #[must_use]
    pub fn past_used_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        self.used.filter(|&used| used < today)
    }
}
