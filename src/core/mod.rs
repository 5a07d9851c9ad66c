//! Core domain types for the helper
//!
//! This module contains the value types every other module works with:
//! letters, words, dictionary candidates and the player's clues.

mod candidate;
mod constraints;
pub mod letters;
mod word;

pub use candidate::Candidate;
pub use constraints::{ConstraintError, ConstraintState};
pub use letters::LetterSet;
pub use word::{WORD_LEN, Word, WordError};
