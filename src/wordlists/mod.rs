//! Dictionaries of candidate answers
//!
//! Provides the embedded dictionary compiled into the binary and loaders for
//! dictionaries kept in files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::{Candidate, WordError};
use chrono::{Days, NaiveDate};
use std::path::PathBuf;
use thiserror::Error;

/// A JSON dictionary older than this many days should be refreshed
pub const STALE_AFTER_DAYS: u64 = 4;

/// Error type for dictionaries that cannot be loaded
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed dictionary JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid word in entry {line}: {source}")]
    InvalidWord {
        line: usize,
        #[source]
        source: WordError,
    },
    #[error("Invalid date '{value}' in entry {line}, expected YYYY-MM-DD")]
    InvalidDate { line: usize, value: String },
}

/// Where a dictionary was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    Embedded,
    Text(PathBuf),
    Json(PathBuf),
}

/// The authoritative pool of candidates
#[derive(Debug, Clone)]
pub struct Dictionary {
    candidates: Vec<Candidate>,
    last_updated: Option<NaiveDate>,
    source: DictionarySource,
}

impl Dictionary {
    #[must_use]
    pub const fn new(candidates: Vec<Candidate>, source: DictionarySource) -> Self {
        Self {
            candidates,
            last_updated: None,
            source,
        }
    }

    /// The embedded dictionary
    #[must_use]
    pub fn embedded() -> Self {
        loader::dictionary_from_slice(WORDS)
    }

    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    #[must_use]
    pub const fn last_updated(&self) -> Option<NaiveDate> {
        self.last_updated
    }

    #[must_use]
    pub const fn source(&self) -> &DictionarySource {
        &self.source
    }

    /// Check whether a JSON dictionary has gone without an update for too long
    ///
    /// A JSON dictionary without an update stamp counts as stale. Text and
    /// embedded dictionaries carry no stamp and are never stale.
    #[must_use]
    pub fn is_stale(&self, today: NaiveDate) -> bool {
        if !matches!(self.source, DictionarySource::Json(_)) {
            return false;
        }
        let threshold = today
            .checked_sub_days(Days::new(STALE_AFTER_DAYS))
            .unwrap_or(NaiveDate::MIN);
        self.last_updated.is_none_or(|updated| updated < threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &(word, used) in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
            if let Some(date) = used {
                assert!(
                    NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok(),
                    "Word '{word}' has invalid date '{date}'"
                );
            }
        }
    }

    #[test]
    fn embedded_dictionary_loads_everything() {
        let dictionary = Dictionary::embedded();
        assert_eq!(dictionary.len(), WORDS_COUNT);
        assert_eq!(dictionary.source(), &DictionarySource::Embedded);
        assert!(!dictionary.is_stale(day(2030, 1, 1)));
    }

    #[test]
    fn embedded_dictionary_covers_common_answers() {
        let dictionary = Dictionary::embedded();
        assert!(dictionary.len() > 2000);
        for word in ["CIGAR", "CRANE", "SLATE", "TRACE", "WORLD", "ZESTY"] {
            assert!(
                dictionary.candidates().iter().any(|c| c.word.text() == word),
                "missing {word}"
            );
        }
    }

    #[test]
    fn embedded_dictionary_has_used_and_unused_words() {
        let dictionary = Dictionary::embedded();
        let today = day(2024, 1, 1);
        assert!(dictionary.candidates().iter().any(|c| c.is_past_used(today)));
        assert!(dictionary.candidates().iter().any(|c| !c.is_past_used(today)));
    }

    #[test]
    fn json_staleness() {
        let mut dictionary =
            loader::parse_json(r#"{"words": [{"w": "FUZZY"}], "lastUpdated": "2024-01-10"}"#)
                .unwrap();
        dictionary.source = DictionarySource::Json(PathBuf::from("words.json"));

        assert!(!dictionary.is_stale(day(2024, 1, 14)));
        assert!(dictionary.is_stale(day(2024, 1, 15)));

        dictionary.last_updated = None;
        assert!(dictionary.is_stale(day(2024, 1, 10)));
    }
}
