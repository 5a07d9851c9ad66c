//! Filter orchestration
//!
//! Runs one filter call end to end: detects the no-clue fast path, builds
//! the per-position pattern, scans the pool, optionally scores, and sorts.
//! Nothing is kept between calls.

use super::pattern::PositionPattern;
use super::scanner::scan;
use super::scoring::assign_scores;
use super::sorting::sort_candidates;
use crate::core::{Candidate, ConstraintState};
use chrono::NaiveDate;
use tracing::debug;

/// Per-call filter options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOptions {
    /// Attach heuristic scores and order by them
    pub rank: bool,
    /// The player's current calendar day, used to tell past answers apart
    pub today: NaiveDate,
}

impl FilterOptions {
    #[must_use]
    pub const fn new(today: NaiveDate) -> Self {
        Self { rank: false, today }
    }

    #[must_use]
    pub const fn ranked(mut self, rank: bool) -> Self {
        self.rank = rank;
        self
    }
}

/// A candidate paired with the score it received in one response
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub candidate: &'a Candidate,
    /// Present only in ranked responses
    pub score: Option<f64>,
}

impl<'a> ScoredCandidate<'a> {
    #[must_use]
    pub const fn new(candidate: &'a Candidate, score: Option<f64>) -> Self {
        Self { candidate, score }
    }
}

/// The candidates of one response
#[derive(Debug, Clone)]
pub enum Candidates<'p, 'a> {
    /// No clues and no ranking: the pool that was passed in, untouched
    Pool(&'p [&'a Candidate]),
    /// Freshly built, ordered list
    Filtered(Vec<ScoredCandidate<'a>>),
}

/// Ordered result of one filter call
#[derive(Debug, Clone)]
pub struct FilterResponse<'p, 'a> {
    candidates: Candidates<'p, 'a>,
}

impl<'p, 'a> FilterResponse<'p, 'a> {
    #[must_use]
    pub const fn candidates(&self) -> &Candidates<'p, 'a> {
        &self.candidates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match &self.candidates {
            Candidates::Pool(pool) => pool.len(),
            Candidates::Filtered(entries) => entries.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the response in order
    pub fn iter(&self) -> Box<dyn Iterator<Item = ScoredCandidate<'a>> + '_> {
        match &self.candidates {
            Candidates::Pool(pool) => {
                Box::new(pool.iter().map(|&candidate| ScoredCandidate::new(candidate, None)))
            }
            Candidates::Filtered(entries) => Box::new(entries.iter().copied()),
        }
    }

    /// True if this response hands back exactly `pool`, not a copy of it
    #[must_use]
    pub fn is_pool(&self, pool: &[&Candidate]) -> bool {
        matches!(self.candidates, Candidates::Pool(p) if std::ptr::eq(p, pool))
    }

    /// The candidates as a pool for narrowing further
    #[must_use]
    pub fn to_pool(&self) -> Vec<&'a Candidate> {
        self.iter().map(|entry| entry.candidate).collect()
    }

    /// Owned entries, independent of the pool this response borrowed from
    #[must_use]
    pub fn into_entries(self) -> Vec<ScoredCandidate<'a>> {
        match self.candidates {
            Candidates::Pool(pool) => pool
                .iter()
                .map(|&candidate| ScoredCandidate::new(candidate, None))
                .collect(),
            Candidates::Filtered(entries) => entries,
        }
    }

    /// Number of candidates not already used as an answer before `today`
    #[must_use]
    pub fn unused_count(&self, today: NaiveDate) -> usize {
        self.iter()
            .filter(|entry| !entry.candidate.is_past_used(today))
            .count()
    }
}

/// Clue filter over a candidate pool
///
/// Stateless: every call is a pure function of the clues, the pool and the
/// options.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordleFilter;

impl WordleFilter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Filter `pool` down to the candidates consistent with `state`
    ///
    /// With no clues and no ranking the pool itself is returned. Otherwise a
    /// new list is built; canonical candidates are never modified, scores
    /// live only in the response.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use wordle_helper::core::{Candidate, ConstraintState, Word};
    /// use wordle_helper::filter::{FilterOptions, WordleFilter};
    ///
    /// let words: Vec<Candidate> = ["audio", "adieu", "stoic"]
    ///     .iter()
    ///     .map(|w| Candidate::new(Word::new(w).unwrap()))
    ///     .collect();
    /// let pool: Vec<&Candidate> = words.iter().collect();
    ///
    /// let state = ConstraintState::parse("A____", ",,,,D", "").unwrap();
    /// let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let response = WordleFilter::new().filter(&state, &pool, FilterOptions::new(today));
    ///
    /// let found: Vec<String> = response.iter().map(|e| e.candidate.word.to_string()).collect();
    /// assert_eq!(found, ["ADIEU", "AUDIO"]);
    /// ```
    #[must_use]
    pub fn filter<'p, 'a>(
        &self,
        state: &ConstraintState,
        pool: &'p [&'a Candidate],
        options: FilterOptions,
    ) -> FilterResponse<'p, 'a> {
        let survivors = if state.is_empty() {
            if !options.rank {
                debug!(pool = pool.len(), "no clues, returning pool as is");
                return FilterResponse {
                    candidates: Candidates::Pool(pool),
                };
            }
            pool.to_vec()
        } else {
            let pattern = PositionPattern::build(state);
            let required = state.hint_letters();
            debug!(
                %pattern,
                required = required.len(),
                banned = state.banned.len(),
                "built position pattern"
            );
            scan(pool, &pattern, required)
        };

        let mut entries: Vec<ScoredCandidate<'a>> = if options.rank {
            let scores = assign_scores(&survivors, state, options.today);
            survivors
                .into_iter()
                .zip(scores)
                .map(|(candidate, score)| ScoredCandidate::new(candidate, score))
                .collect()
        } else {
            survivors
                .into_iter()
                .map(|candidate| ScoredCandidate::new(candidate, None))
                .collect()
        };

        sort_candidates(&mut entries, options.today);
        debug!(
            pool = pool.len(),
            matched = entries.len(),
            rank = options.rank,
            "filtered candidates"
        );

        FilterResponse {
            candidates: Candidates::Filtered(entries),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    const POOL: [&str; 9] = [
        "ADIEU", "AUDIO", "STOIC", "FIRST", "FREED", "FRESH", "FRIED", "FRUIT", "FUZZY",
    ];

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn dictionary() -> Vec<Candidate> {
        POOL.iter()
            .map(|w| Candidate::new(Word::new(w).unwrap()))
            .collect()
    }

    fn words(response: &FilterResponse<'_, '_>) -> Vec<String> {
        response
            .iter()
            .map(|e| e.candidate.word.text().to_string())
            .collect()
    }

    #[test]
    fn empty_state_unranked_returns_same_pool() {
        let dict = dictionary();
        let pool: Vec<&Candidate> = dict.iter().collect();
        let response =
            WordleFilter::new().filter(&ConstraintState::new(), &pool, FilterOptions::new(today()));

        assert!(response.is_pool(&pool));
        assert_eq!(response.len(), POOL.len());
        assert!(response.iter().all(|e| e.score.is_none()));
    }

    #[test]
    fn empty_state_ranked_returns_scored_copy() {
        let dict = dictionary();
        let pool: Vec<&Candidate> = dict.iter().collect();
        let options = FilterOptions::new(today()).ranked(true);
        let response = WordleFilter::new().filter(&ConstraintState::new(), &pool, options);

        assert!(!response.is_pool(&pool));
        assert_eq!(response.len(), POOL.len());
        assert!(response.iter().all(|e| e.score.is_some()));
    }

    #[test]
    fn unranked_results_are_alphabetical() {
        let dict = dictionary();
        let pool: Vec<&Candidate> = dict.iter().rev().collect();
        let state = ConstraintState::parse("F____", ",,,R,", "O").unwrap();
        let response = WordleFilter::new().filter(&state, &pool, FilterOptions::new(today()));

        assert_eq!(words(&response), ["FIRST", "FREED", "FRESH", "FRIED", "FRUIT"]);
    }

    #[test]
    fn ranked_results_follow_score() {
        let dict = dictionary();
        let pool: Vec<&Candidate> = dict.iter().collect();
        let state = ConstraintState::parse("F____", ",,,R,", "O").unwrap();
        let options = FilterOptions::new(today()).ranked(true);
        let response = WordleFilter::new().filter(&state, &pool, options);

        let scored: Vec<(String, Option<f64>)> = response
            .iter()
            .map(|e| (e.candidate.word.text().to_string(), e.score))
            .collect();
        assert_eq!(
            scored,
            [
                ("FRIED".to_string(), Some(54.5)),
                ("FREED".to_string(), Some(52.4)),
                ("FRESH".to_string(), Some(51.4)),
                ("FRUIT".to_string(), Some(48.9)),
                ("FIRST".to_string(), Some(45.5)),
            ]
        );
    }

    #[test]
    fn contradictory_clues_give_empty_response() {
        let dict = dictionary();
        let pool: Vec<&Candidate> = dict.iter().collect();
        let state = ConstraintState::parse("A____", "A,,,,", "").unwrap();
        let response = WordleFilter::new().filter(&state, &pool, FilterOptions::new(today()));
        assert!(response.is_empty());
    }

    #[test]
    fn unused_count_skips_past_answers() {
        let mut dict = dictionary();
        dict[0] = dict[0]
            .clone()
            .with_used(NaiveDate::from_ymd_opt(2022, 2, 1).unwrap());
        let pool: Vec<&Candidate> = dict.iter().collect();
        let state = ConstraintState::parse("A____", "", "").unwrap();
        let response = WordleFilter::new().filter(&state, &pool, FilterOptions::new(today()));

        assert_eq!(words(&response), ["AUDIO", "ADIEU"]);
        assert_eq!(response.unused_count(today()), 1);
    }

    #[test]
    fn to_pool_keeps_order() {
        let dict = dictionary();
        let pool: Vec<&Candidate> = dict.iter().collect();
        let state = ConstraintState::parse("F____", "", "").unwrap();
        let response = WordleFilter::new().filter(&state, &pool, FilterOptions::new(today()));
        let narrowed = response.to_pool();

        assert_eq!(narrowed.len(), 6);
        assert!(std::ptr::eq(narrowed[0], &dict[3]));
    }
}
