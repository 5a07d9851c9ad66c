//! Wordle Helper
//!
//! Narrows a dictionary of five-letter words down to those consistent with
//! the clues collected so far, and optionally ranks them by a letter-frequency
//! heuristic.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use wordle_helper::core::{Candidate, ConstraintState};
//! use wordle_helper::filter::{FilterOptions, WordleFilter};
//! use wordle_helper::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::embedded();
//! let pool: Vec<&Candidate> = dictionary.candidates().iter().collect();
//!
//! // S is first, I and S are in the word but not third, A D E U are absent
//! let state = ConstraintState::parse("S____", ",,IS,,", "ADEU").unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let response = WordleFilter::new().filter(&state, &pool, FilterOptions::new(today).ranked(true));
//!
//! for entry in response.iter() {
//!     println!("{} {:?}", entry.candidate.word, entry.score);
//! }
//! ```

// Core domain types
pub mod core;

// Clue filtering and ranking
pub mod filter;

// Dictionaries
pub mod wordlists;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Diagnostic logging
pub mod logging;
