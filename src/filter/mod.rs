//! Clue filtering and ranking
//!
//! Clues → per-position pattern → scan → (optional) scores → sort.

mod engine;
pub mod pattern;
pub mod scanner;
pub mod scoring;
pub mod session;
mod sorting;

pub use engine::{Candidates, FilterOptions, FilterResponse, ScoredCandidate, WordleFilter};
pub use pattern::PositionPattern;
pub use session::Session;
pub use sorting::compare;
