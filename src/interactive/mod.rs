//! Interactive terminal interface
//!
//! A full-screen form for entering clues, with the candidate list updating
//! on every keystroke.

mod app;
mod rendering;

pub use app::{App, Field, Message, MessageStyle, run_tui};
