//! Incremental narrowing across edits
//!
//! The player edits clues one keystroke at a time. When an edit only adds
//! clues, the new result is a subset of the current one, so the session
//! filters the current candidates instead of the whole dictionary. Any edit
//! that removes a clue goes back to the full pool.

use super::engine::{FilterOptions, ScoredCandidate, WordleFilter};
use crate::core::{Candidate, ConstraintState};
use chrono::NaiveDate;
use tracing::debug;

/// Clue state and current result for one player
pub struct Session<'a> {
    filter: WordleFilter,
    dictionary: Vec<&'a Candidate>,
    state: ConstraintState,
    entries: Vec<ScoredCandidate<'a>>,
    rank: bool,
    today: NaiveDate,
}

impl<'a> Session<'a> {
    /// Start a session with no clues over the whole dictionary
    #[must_use]
    pub fn new(dictionary: &'a [Candidate], rank: bool, today: NaiveDate) -> Self {
        let mut session = Self {
            filter: WordleFilter::new(),
            dictionary: dictionary.iter().collect(),
            state: ConstraintState::new(),
            entries: Vec::new(),
            rank,
            today,
        };
        session.refilter_from_dictionary();
        session
    }

    #[must_use]
    pub const fn state(&self) -> &ConstraintState {
        &self.state
    }

    #[must_use]
    pub const fn is_ranked(&self) -> bool {
        self.rank
    }

    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// Current ordered candidates
    #[must_use]
    pub fn candidates(&self) -> &[ScoredCandidate<'a>] {
        &self.entries
    }

    /// Number of current candidates not used as an answer before today
    #[must_use]
    pub fn unused_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| !entry.candidate.is_past_used(self.today))
            .count()
    }

    /// Replace the clue state and refilter
    pub fn update(&mut self, state: ConstraintState) {
        let narrowing = state.is_at_least_as_restrictive_as(&self.state);
        self.state = state;

        if narrowing {
            debug!(current = self.entries.len(), "narrowing current candidates");
            let pool: Vec<&'a Candidate> = self.entries.iter().map(|e| e.candidate).collect();
            self.entries = self.run(&pool);
        } else {
            self.refilter_from_dictionary();
        }
    }

    /// Apply an edit to a copy of the current clues, then refilter
    pub fn edit(&mut self, change: impl FnOnce(&mut ConstraintState)) {
        let mut state = self.state;
        change(&mut state);
        self.update(state);
    }

    /// Turn ranking on or off and refilter the current candidates
    pub fn set_rank(&mut self, rank: bool) {
        if rank == self.rank {
            return;
        }
        self.rank = rank;
        let pool: Vec<&'a Candidate> = self.entries.iter().map(|e| e.candidate).collect();
        self.entries = self.run(&pool);
    }

    /// Clear every clue
    pub fn reset(&mut self) {
        self.state = ConstraintState::new();
        self.refilter_from_dictionary();
    }

    fn refilter_from_dictionary(&mut self) {
        debug!(dictionary = self.dictionary.len(), "filtering full dictionary");
        let dictionary = std::mem::take(&mut self.dictionary);
        self.entries = self.run(&dictionary);
        self.dictionary = dictionary;
    }

    fn run(&self, pool: &[&'a Candidate]) -> Vec<ScoredCandidate<'a>> {
        let options = FilterOptions::new(self.today).ranked(self.rank);
        self.filter
            .filter(&self.state, pool, options)
            .into_entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn dictionary() -> Vec<Candidate> {
        ["ADIEU", "AUDIO", "STOIC", "FIRST", "FREED", "FRESH", "FRIED", "FRUIT", "FUZZY"]
            .iter()
            .map(|w| Candidate::new(Word::new(w).unwrap()))
            .collect()
    }

    fn words(session: &Session<'_>) -> Vec<String> {
        session
            .candidates()
            .iter()
            .map(|e| e.candidate.word.text().to_string())
            .collect()
    }

    #[test]
    fn starts_with_whole_dictionary() {
        let dict = dictionary();
        let session = Session::new(&dict, false, today());
        assert_eq!(session.candidates().len(), dict.len());
        assert_eq!(session.unused_count(), dict.len());
    }

    #[test]
    fn adding_clues_narrows() {
        let dict = dictionary();
        let mut session = Session::new(&dict, false, today());

        session.edit(|s| s.set_known(0, "f"));
        assert_eq!(session.candidates().len(), 6);

        session.edit(|s| s.set_banned("o"));
        session.edit(|s| s.set_hint(4, "z"));
        assert_eq!(words(&session), ["FUZZY"]);
    }

    #[test]
    fn removing_clue_refilters_dictionary() {
        let dict = dictionary();
        let mut session = Session::new(&dict, false, today());

        session.edit(|s| s.set_hint(4, "z"));
        assert_eq!(words(&session), ["FUZZY"]);

        session.edit(|s| s.set_hint(4, ""));
        assert_eq!(session.candidates().len(), dict.len());
    }

    #[test]
    fn toggling_rank_adds_and_clears_scores() {
        let dict = dictionary();
        let mut session = Session::new(&dict, false, today());
        session.edit(|s| s.set_known(0, "a"));

        session.set_rank(true);
        assert!(session.candidates().iter().all(|e| e.score.is_some()));

        session.set_rank(false);
        assert!(session.candidates().iter().all(|e| e.score.is_none()));
        assert_eq!(words(&session), ["ADIEU", "AUDIO"]);
    }

    #[test]
    fn reset_restores_everything() {
        let dict = dictionary();
        let mut session = Session::new(&dict, true, today());
        session.edit(|s| s.set_known(0, "s"));
        assert_eq!(words(&session), ["STOIC"]);

        session.reset();
        assert!(session.state().is_empty());
        assert_eq!(session.candidates().len(), dict.len());
    }
}
