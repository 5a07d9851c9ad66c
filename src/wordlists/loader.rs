//! Dictionary loading utilities
//!
//! Provides functions to load dictionaries from text or JSON files, or from
//! the embedded constant.
//!
//! Text format, one entry per line (blank lines and `#` comments skipped):
//!
//! ```text
//! CIGAR 2021-06-19 nyt,archive
//! ADIEU
//! ```
//!
//! JSON format:
//!
//! ```json
//! {"words": [{"w": "CIGAR", "d": "2021-06-19", "s": ["nyt"]}], "lastUpdated": "2024-01-01"}
//! ```

use super::{Dictionary, DictionaryError, DictionarySource};
use crate::core::{Candidate, Word};
use chrono::NaiveDate;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize)]
struct RawDictionary {
    words: Vec<RawEntry>,
    #[serde(rename = "lastUpdated", default)]
    last_updated: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    w: String,
    #[serde(default)]
    d: Option<String>,
    #[serde(default)]
    s: Vec<String>,
}

/// Load a dictionary from a file
///
/// Files ending in `.json` are read as JSON, anything else as text.
///
/// # Errors
///
/// Returns `DictionaryError` if the file cannot be read or an entry is malformed.
///
/// # Examples
/// ```no_run
/// use wordle_helper::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let mut dictionary = if is_json {
        parse_json(&content)?
    } else {
        parse_text(&content)?
    };

    dictionary.source = if is_json {
        DictionarySource::Json(path.to_path_buf())
    } else {
        DictionarySource::Text(path.to_path_buf())
    };

    debug!(path = %path.display(), words = dictionary.len(), "loaded dictionary");
    Ok(dictionary)
}

/// Parse a text dictionary
///
/// # Errors
///
/// Returns `DictionaryError` naming the line of the first malformed entry.
pub fn parse_text(content: &str) -> Result<Dictionary, DictionaryError> {
    let mut candidates = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut fields = trimmed.split_whitespace();
        let word = fields.next().unwrap_or_default();
        let word = Word::new(word).map_err(|source| DictionaryError::InvalidWord {
            line: line_no,
            source,
        })?;

        let mut candidate = Candidate::new(word);
        if let Some(date) = fields.next() {
            candidate = candidate.with_used(parse_date(date, line_no)?);
        }
        if let Some(sources) = fields.next() {
            candidate = candidate.with_sources(
                sources
                    .split(',')
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            );
        }

        candidates.push(candidate);
    }

    Ok(Dictionary::new(dedup(candidates), DictionarySource::Embedded))
}

/// Parse a JSON dictionary
///
/// # Errors
///
/// Returns `DictionaryError` if the JSON is malformed or an entry is invalid.
pub fn parse_json(content: &str) -> Result<Dictionary, DictionaryError> {
    let raw: RawDictionary = serde_json::from_str(content)?;

    let candidates = raw
        .words
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let entry_no = index + 1;
            let word = Word::new(&entry.w).map_err(|source| DictionaryError::InvalidWord {
                line: entry_no,
                source,
            })?;
            let mut candidate = Candidate::new(word).with_sources(entry.s);
            if let Some(date) = entry.d.as_deref() {
                candidate = candidate.with_used(parse_date(date, entry_no)?);
            }
            Ok(candidate)
        })
        .collect::<Result<Vec<_>, DictionaryError>>()?;

    let mut dictionary = Dictionary::new(dedup(candidates), DictionarySource::Embedded);
    // Timestamps carry a time part; only the calendar day matters
    dictionary.last_updated = raw
        .last_updated
        .as_deref()
        .and_then(|stamp| stamp.get(..10))
        .and_then(|day| NaiveDate::parse_from_str(day, DATE_FORMAT).ok());
    Ok(dictionary)
}

/// Build a dictionary from embedded (word, used date) pairs
///
/// Invalid entries are skipped with a warning.
///
/// # Examples
/// ```
/// use wordle_helper::wordlists::loader::dictionary_from_slice;
/// use wordle_helper::wordlists::WORDS;
///
/// let dictionary = dictionary_from_slice(WORDS);
/// assert_eq!(dictionary.len(), WORDS.len());
/// ```
#[must_use]
pub fn dictionary_from_slice(slice: &[(&str, Option<&str>)]) -> Dictionary {
    let candidates = slice
        .iter()
        .enumerate()
        .filter_map(|(index, &(word, used))| {
            let entry = Word::new(word)
                .map_err(|source| DictionaryError::InvalidWord {
                    line: index + 1,
                    source,
                })
                .and_then(|word| {
                    let candidate = Candidate::new(word);
                    match used {
                        Some(date) => Ok(candidate.with_used(parse_date(date, index + 1)?)),
                        None => Ok(candidate),
                    }
                });
            entry
                .inspect_err(|err| warn!(%err, "skipping embedded entry"))
                .ok()
        })
        .collect();

    Dictionary::new(dedup(candidates), DictionarySource::Embedded)
}

fn parse_date(value: &str, line: usize) -> Result<NaiveDate, DictionaryError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| DictionaryError::InvalidDate {
        line,
        value: value.to_string(),
    })
}

/// Drop repeated words, keeping the first entry for each
fn dedup(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut seen = FxHashSet::default();
    candidates
        .into_iter()
        .filter(|candidate| {
            let fresh = seen.insert(candidate.word.clone());
            if !fresh {
                debug!(word = %candidate.word, "dropping duplicate dictionary entry");
            }
            fresh
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn text_with_dates_and_sources() {
        let content = "# comment\nCIGAR 2021-06-19 nyt,archive\n\nadieu\n";
        let dictionary = parse_text(content).unwrap();

        assert_eq!(dictionary.len(), 2);
        let cigar = &dictionary.candidates()[0];
        assert_eq!(cigar.word.text(), "CIGAR");
        assert_eq!(cigar.used, Some(day(2021, 6, 19)));
        assert_eq!(cigar.sources, ["nyt", "archive"]);

        let adieu = &dictionary.candidates()[1];
        assert_eq!(adieu.used, None);
        assert!(adieu.sources.is_empty());
    }

    #[test]
    fn text_reports_bad_line() {
        let err = parse_text("CIGAR\nTOOLONG\n").unwrap_err();
        assert!(matches!(err, DictionaryError::InvalidWord { line: 2, .. }));

        let err = parse_text("CIGAR 2021-13-40\n").unwrap_err();
        assert!(matches!(err, DictionaryError::InvalidDate { line: 1, .. }));
    }

    #[test]
    fn text_drops_duplicates() {
        let dictionary = parse_text("FRESH 2021-07-11\nfresh\nFRUIT\n").unwrap();
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.candidates()[0].used, Some(day(2021, 7, 11)));
    }

    #[test]
    fn json_entries() {
        let content = r#"{
            "words": [
                {"w": "CIGAR", "d": "2021-06-19", "s": ["nyt"]},
                {"w": "ADIEU", "s": []},
                {"w": "AUDIO"}
            ],
            "lastUpdated": "2024-01-05T08:30:00.000Z"
        }"#;
        let dictionary = parse_json(content).unwrap();

        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.candidates()[0].used, Some(day(2021, 6, 19)));
        assert_eq!(dictionary.candidates()[0].sources, ["nyt"]);
        assert_eq!(dictionary.last_updated(), Some(day(2024, 1, 5)));
    }

    #[test]
    fn json_without_last_updated() {
        let dictionary = parse_json(r#"{"words": [{"w": "FUZZY"}]}"#).unwrap();
        assert_eq!(dictionary.last_updated(), None);
    }

    #[test]
    fn json_rejects_malformed_input() {
        assert!(matches!(
            parse_json("{\"words\": 3}"),
            Err(DictionaryError::Json(_))
        ));
        assert!(matches!(
            parse_json(r#"{"words": [{"w": "FUZZY"}, {"w": "F"}]}"#),
            Err(DictionaryError::InvalidWord { line: 2, .. })
        ));
    }

    #[test]
    fn slice_skips_invalid_entries() {
        let input = &[
            ("stoic", None),
            ("toolong", None),
            ("cigar", Some("2021-06-19")),
            ("rebut", Some("not a date")),
        ];
        let dictionary = dictionary_from_slice(input);

        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.candidates()[0].word.text(), "STOIC");
        assert_eq!(dictionary.candidates()[1].used, Some(day(2021, 6, 19)));
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let dictionary = dictionary_from_slice(WORDS);
        assert_eq!(dictionary.len(), WORDS.len());
    }
}
