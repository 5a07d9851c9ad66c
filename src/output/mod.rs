//! Printing for the one-shot `filter` command

pub mod display;
pub mod formatters;

pub use display::print_filter_response;
